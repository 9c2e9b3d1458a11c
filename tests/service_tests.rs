//! Booking service tests
//!
//! Runs the service against a real database through the DI container, and
//! against stub repositories for storage failures.
//!
//! Tests are serialized because they share the global test pool.

use async_trait::async_trait;
use chrono::NaiveDate;
use di::Ref;
use grand_reserve::core::cache::InMemoryPageCache;
use grand_reserve::core::services::{
    BOOKING_CONFIRMED, BOOKING_FAILED, DefaultBookingService, INVALID_FORM, STATUS_UPDATE_FAILED,
};
use grand_reserve::core::traits::{BookingService, FormState, Outcome, PageCache, StatusUpdate};
use grand_reserve::core::validation::{BookingForm, FormValue};
use grand_reserve::infrastructure::database::DatabaseConnection;
use grand_reserve::infrastructure::entities::{Booking, BookingStatus, NewBooking};
use grand_reserve::infrastructure::traits::BookingRepository;
use serial_test::serial;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Mutex;
use std::time::Duration;

async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .unwrap();
    sqlx::migrate!().run(&pool).await.unwrap();

    DatabaseConnection::set_test_pool(pool.clone());

    pool
}

fn cleanup_test_db() {
    DatabaseConnection::clear_test_pool();
}

fn booking_service() -> Ref<dyn BookingService> {
    grand_reserve::services()
        .build_provider()
        .unwrap()
        .get_required::<dyn BookingService>()
}

fn jane_doe() -> BookingForm {
    BookingForm {
        full_name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        room_type: "deluxe-king".to_owned(),
        guests: FormValue::from("2"),
        check_in: "2025-01-10".to_owned(),
        check_out: "2025-01-13".to_owned(),
        card_number: Some("4242424242424242".to_owned()),
        expiry_date: Some("12/29".to_owned()),
        cvc: Some("123".to_owned()),
        ..BookingForm::default()
    }
}

async fn count_bookings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Repository whose database is always gone.
struct BrokenRepository;

#[async_trait]
impl BookingRepository for BrokenRepository {
    async fn list_bookings(&self) -> Result<Vec<Booking>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn find_booking(&self, _booking_id: i64) -> Result<Option<Booking>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn create_booking(&self, _booking: NewBooking) -> Result<Booking, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn update_booking_status(
        &self,
        _booking_id: i64,
        _status: BookingStatus,
    ) -> Result<u64, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }
}

/// Page cache that remembers which paths were revalidated.
#[derive(Default)]
struct RecordingCache {
    revalidated: Mutex<Vec<String>>,
}

impl PageCache for RecordingCache {
    fn get(&self, _path: &str) -> Option<String> {
        None
    }

    fn put(&self, _path: &str, _html: String) {}

    fn revalidate_path(&self, path: &str) {
        self.revalidated.lock().unwrap().push(path.to_owned());
    }
}

#[tokio::test]
#[serial]
async fn test_valid_submission_stores_one_confirmed_booking() {
    let pool = setup_test_db().await;
    let service = booking_service();

    let state = service.create_booking(jane_doe()).await;

    assert_eq!(state, FormState::succeeded(BOOKING_CONFIRMED));

    let bookings = service.list_bookings().await;
    assert_eq!(bookings.len(), 1);
    let booking = &bookings[0];
    assert_eq!(booking.full_name, "Jane Doe");
    assert_eq!(booking.email, "jane@example.com");
    assert_eq!(booking.phone, None);
    assert_eq!(booking.room_type, "deluxe-king");
    assert_eq!(booking.guests, 2);
    assert_eq!(booking.check_in, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
    assert_eq!(booking.check_out, NaiveDate::from_ymd_opt(2025, 1, 13).unwrap());
    assert_eq!(booking.status, BookingStatus::Confirmed);

    // no column holds card data
    let row: Vec<String> = sqlx::query_scalar(
        "SELECT full_name || email || IFNULL(phone, '') || room_type || check_in || check_out || status FROM bookings",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert!(!row[0].contains("4242"));
    assert!(!row[0].contains("12/29"));

    cleanup_test_db();
}

#[tokio::test]
#[serial]
async fn test_invalid_submissions_write_nothing() {
    let pool = setup_test_db().await;
    let service = booking_service();

    for form in [
        BookingForm {
            email: "not-an-email".to_owned(),
            ..jane_doe()
        },
        BookingForm {
            full_name: String::new(),
            ..jane_doe()
        },
        BookingForm {
            guests: FormValue::from("0"),
            ..jane_doe()
        },
        BookingForm::default(),
    ] {
        let state = service.create_booking(form).await;
        assert!(!state.success);
        assert_eq!(state.message, INVALID_FORM);
        assert_eq!(state.outcome, Outcome::Rejected);
    }

    assert_eq!(count_bookings(&pool).await, 0);

    cleanup_test_db();
}

#[tokio::test]
#[serial]
async fn test_resubmission_creates_duplicate() {
    let pool = setup_test_db().await;
    let service = booking_service();

    service.create_booking(jane_doe()).await;
    service.create_booking(jane_doe()).await;

    assert_eq!(count_bookings(&pool).await, 2);

    cleanup_test_db();
}

#[tokio::test]
#[serial]
async fn test_listing_is_oldest_first() {
    let _pool = setup_test_db().await;
    let service = booking_service();

    for name in ["First Guest", "Second Guest", "Third Guest"] {
        let state = service
            .create_booking(BookingForm {
                full_name: name.to_owned(),
                ..jane_doe()
            })
            .await;
        assert!(state.success);
    }

    let names: Vec<String> = service
        .list_bookings()
        .await
        .into_iter()
        .map(|booking| booking.full_name)
        .collect();

    assert_eq!(names, ["First Guest", "Second Guest", "Third Guest"]);

    cleanup_test_db();
}

#[tokio::test]
#[serial]
async fn test_cancelling_changes_only_that_booking() {
    let _pool = setup_test_db().await;
    let service = booking_service();

    for name in ["First Guest", "Second Guest", "Third Guest"] {
        service
            .create_booking(BookingForm {
                full_name: name.to_owned(),
                ..jane_doe()
            })
            .await;
    }
    let before = service.list_bookings().await;
    let target = before[1].id;

    let state = service
        .update_booking_status(target, StatusUpdate::Cancelled)
        .await;
    assert_eq!(
        state,
        FormState::succeeded("Booking status updated to Cancelled.")
    );

    let after = service.list_bookings().await;
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(&after) {
        assert_eq!(old.id, new.id);
        if new.id == target {
            assert_eq!(new.status, BookingStatus::Cancelled);
        } else {
            assert_eq!(new.status, old.status);
        }
        assert_eq!(old.created_at, new.created_at);
    }

    cleanup_test_db();
}

#[tokio::test]
#[serial]
async fn test_any_status_is_reachable_from_any_status() {
    let _pool = setup_test_db().await;
    let service = booking_service();

    service.create_booking(jane_doe()).await;
    let id = service.list_bookings().await[0].id;

    for (update, expected) in [
        (StatusUpdate::Cancelled, BookingStatus::Cancelled),
        (StatusUpdate::Confirmed, BookingStatus::Confirmed),
        (StatusUpdate::Confirmed, BookingStatus::Confirmed),
    ] {
        assert!(service.update_booking_status(id, update).await.success);
        let booking = service.find_booking(id).await.unwrap().unwrap();
        assert_eq!(booking.status, expected);
    }

    cleanup_test_db();
}

#[tokio::test]
#[serial]
async fn test_updating_missing_booking_reports_success() {
    let pool = setup_test_db().await;
    let service = booking_service();

    let state = service
        .update_booking_status(999, StatusUpdate::Confirmed)
        .await;

    assert!(state.success);
    assert_eq!(count_bookings(&pool).await, 0);

    cleanup_test_db();
}

#[tokio::test]
#[serial]
async fn test_empty_listing_and_failed_listing_look_the_same() {
    let pool = setup_test_db().await;
    let service = booking_service();

    assert!(service.list_bookings().await.is_empty());
    assert!(service.try_list_bookings().await.unwrap().is_empty());

    pool.close().await;

    assert!(service.list_bookings().await.is_empty());
    assert!(service.try_list_bookings().await.is_err());

    cleanup_test_db();
}

#[tokio::test]
async fn test_storage_failures_produce_generic_results() {
    let cache = Ref::new(RecordingCache::default());
    let service = DefaultBookingService::new(Ref::new(BrokenRepository), cache.clone());

    let state = service.create_booking(jane_doe()).await;
    assert_eq!(state, FormState::failed(BOOKING_FAILED));
    assert_eq!(state.outcome, Outcome::Failed);

    let state = service
        .update_booking_status(1, StatusUpdate::Cancelled)
        .await;
    assert_eq!(state, FormState::failed(STATUS_UPDATE_FAILED));

    assert!(service.list_bookings().await.is_empty());
    assert!(service.try_list_bookings().await.is_err());
    assert!(service.find_booking(1).await.is_err());

    // nothing changed, so nothing is stale
    assert!(cache.revalidated.lock().unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn test_writes_revalidate_cached_pages() {
    let _pool = setup_test_db().await;
    let provider = grand_reserve::services().build_provider().unwrap();
    let repo = provider.get_required::<dyn BookingRepository>();
    let cache = Ref::new(RecordingCache::default());
    let service = DefaultBookingService::new(repo, cache.clone());

    service.create_booking(jane_doe()).await;
    assert_eq!(*cache.revalidated.lock().unwrap(), ["/booking", "/admin"]);

    cache.revalidated.lock().unwrap().clear();
    service
        .update_booking_status(1, StatusUpdate::Cancelled)
        .await;
    assert_eq!(*cache.revalidated.lock().unwrap(), ["/admin"]);

    cleanup_test_db();
}

#[test]
fn test_page_cache_revalidation_and_expiry() {
    let cache = InMemoryPageCache::with_ttl(Duration::from_secs(60));

    cache.put("/admin", "<p>one booking</p>".to_owned());
    assert_eq!(cache.get("/admin").as_deref(), Some("<p>one booking</p>"));
    assert_eq!(cache.get("/booking"), None);

    cache.revalidate_path("/admin");
    assert_eq!(cache.get("/admin"), None);

    let uncached = InMemoryPageCache::with_ttl(Duration::ZERO);
    uncached.put("/", "<p>home</p>".to_owned());
    assert_eq!(uncached.get("/"), None);
}
