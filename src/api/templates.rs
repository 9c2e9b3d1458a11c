//! HTML templates

use chrono::NaiveDate;
use di::{inject, injectable};
use log::error;
use minijinja::Environment;
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("rooms.html", include_str!("../../templates/rooms.html")),
    ("room_card.html", include_str!("../../templates/room_card.html")),
    ("room_detail.html", include_str!("../../templates/room_detail.html")),
    ("booking.html", include_str!("../../templates/booking.html")),
    ("admin_login.html", include_str!("../../templates/admin_login.html")),
    ("admin.html", include_str!("../../templates/admin.html")),
    (
        "booking_detail.html",
        include_str!("../../templates/booking_detail.html"),
    ),
];

pub struct PageRenderer {
    env: Environment<'static>,
}

#[injectable]
impl PageRenderer {
    #[inject]
    pub fn create() -> PageRenderer {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.add_filter("long_date", long_date);

        for &(name, source) in TEMPLATES {
            // a broken template surfaces as a render error on its page
            if let Err(e) = env.add_template(name, source) {
                error!("failed to load template {name}: {e:#}");
            }
        }

        PageRenderer { env }
    }
}

impl PageRenderer {
    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(context)
    }
}

/// `2025-01-10` -> `Jan 10, 2025`. Anything else is passed through.
fn long_date(value: String) -> String {
    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .map(|date| date.format("%b %d, %Y").to_string())
        .unwrap_or(value)
}
