//! Rooms, booking choices and dashboard figures shown on the site.
//!
//! None of this is stored in the database; the content ships with the binary.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub image_url: &'static str,
    pub image_hint: &'static str,
    pub rating: f64,
    pub reviews: u32,
    pub amenities: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomChoice {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

const ROOM_IMAGE: &str = "https://placehold.co/600x400.png";

pub static ROOMS: &[Room] = &[
    Room {
        id: "1",
        name: "Presidential Suite",
        summary: "Experience unparalleled luxury with panoramic city views.",
        description: "Experience unparalleled luxury with panoramic city views, a private study, and a grand living area.",
        price: 1200,
        image_url: ROOM_IMAGE,
        image_hint: "luxury suite",
        rating: 4.9,
        reviews: 128,
        amenities: &[
            "King Bed",
            "Sleeps 4",
            "1,800 sq ft",
            "High-speed Wi-Fi",
            "Air Conditioning",
            "Spa Bathroom",
        ],
    },
    Room {
        id: "2",
        name: "Deluxe King Room",
        summary: "A spacious and elegant room with a king-sized bed.",
        description: "A spacious and elegant room with a king-sized bed, marble bathroom, and modern amenities.",
        price: 550,
        image_url: ROOM_IMAGE,
        image_hint: "elegant hotel room",
        rating: 4.7,
        reviews: 342,
        amenities: &[
            "King Bed",
            "Sleeps 2",
            "450 sq ft",
            "High-speed Wi-Fi",
            "Air Conditioning",
            "Marble Bathroom",
        ],
    },
    Room {
        id: "3",
        name: "Ocean View Villa",
        summary: "Private villa with stunning views of the ocean.",
        description: "Private villa with stunning views of the ocean, a personal infinity pool, and 24/7 butler service.",
        price: 2500,
        image_url: ROOM_IMAGE,
        image_hint: "ocean villa",
        rating: 5.0,
        reviews: 64,
        amenities: &[
            "King Bed",
            "Sleeps 4",
            "2,400 sq ft",
            "Infinity Pool",
            "Butler Service",
            "High-speed Wi-Fi",
        ],
    },
    Room {
        id: "4",
        name: "Standard Queen Room",
        summary: "A comfortable and stylish room with a plush queen bed.",
        description: "A comfortable and stylish room perfect for solo travelers or couples, with a plush queen bed.",
        price: 350,
        image_url: ROOM_IMAGE,
        image_hint: "hotel room",
        rating: 4.5,
        reviews: 511,
        amenities: &[
            "Queen Bed",
            "Sleeps 2",
            "320 sq ft",
            "High-speed Wi-Fi",
            "Air Conditioning",
        ],
    },
    Room {
        id: "5",
        name: "Family Suite",
        summary: "Two connecting rooms with space for the whole family.",
        description: "Two connecting rooms provide ample space for the whole family, with games and entertainment included.",
        price: 850,
        image_url: ROOM_IMAGE,
        image_hint: "family suite",
        rating: 4.8,
        reviews: 203,
        amenities: &[
            "King Bed + Twin Beds",
            "Sleeps 6",
            "1,100 sq ft",
            "Games Console",
            "High-speed Wi-Fi",
            "Air Conditioning",
        ],
    },
    Room {
        id: "6",
        name: "The Penthouse",
        summary: "Two floors of opulent space and a private rooftop terrace.",
        description: "The crown jewel of The Grand Reserve, offering two floors of opulent space and a private rooftop terrace.",
        price: 5000,
        image_url: ROOM_IMAGE,
        image_hint: "luxury penthouse",
        rating: 5.0,
        reviews: 37,
        amenities: &[
            "Two King Beds",
            "Sleeps 6",
            "4,000 sq ft",
            "Rooftop Terrace",
            "Butler Service",
            "High-speed Wi-Fi",
        ],
    },
];

/// Room types offered on the booking form; the first is preselected.
pub static ROOM_CHOICES: &[RoomChoice] = &[
    RoomChoice {
        value: "deluxe-king",
        label: "Deluxe King",
    },
    RoomChoice {
        value: "standard-queen",
        label: "Standard Queen",
    },
    RoomChoice {
        value: "family-suite",
        label: "Family Suite",
    },
    RoomChoice {
        value: "presidential-suite",
        label: "Presidential Suite",
    },
    RoomChoice {
        value: "ocean-villa",
        label: "Ocean View Villa",
    },
];

// Placeholder figures; there is no reporting backend.
pub static DASHBOARD_METRICS: &[Metric] = &[
    Metric {
        title: "Total Revenue",
        value: "$45,231.89",
        change: "+20.1% from last month",
    },
    Metric {
        title: "Total Bookings",
        value: "+2350",
        change: "+180.1% from last month",
    },
    Metric {
        title: "New Check-ins",
        value: "+573",
        change: "+19% from last month",
    },
    Metric {
        title: "Occupancy Rate",
        value: "82.5%",
        change: "+2.1% from last month",
    },
];

pub fn find_room(id: &str) -> Option<&'static Room> {
    ROOMS.iter().find(|room| room.id == id)
}

/// The rooms shown on the home page.
pub fn featured_rooms() -> &'static [Room] {
    &ROOMS[..3]
}
