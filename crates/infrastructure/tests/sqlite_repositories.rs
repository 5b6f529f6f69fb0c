mod common;
use common::setup_db;

use domain::{
    DomainError, StockEntry, User, UserRepository, Watchlist, WatchlistRepository, WatchlistType,
};
use infrastructure::{Database, SqliteUserRepository, SqliteWatchlistRepository};
use rust_decimal_macros::dec;

fn nflx() -> StockEntry {
    StockEntry::new("NFLX", "Netflix Inc.", "Technology", dec!(400.00))
        .unwrap()
        .with_change_percent(dec!(2.5))
}

#[test]
fn migrations_are_applied_once() {
    let db = setup_db();

    let reopened = Database::new(&db.path).unwrap();
    assert_eq!(reopened.run_migrations().unwrap(), 0);
}

#[tokio::test]
async fn user_round_trip_by_email() {
    let db = setup_db();
    let repo = SqliteUserRepository::new(db.database.get_pool().clone());

    assert_eq!(repo.find_by_email("admin@tradinggrow.com").await.unwrap(), None);

    let saved = repo
        .save(&User::new_admin(
            "admin@tradinggrow.com".into(),
            "Admin User".into(),
        ))
        .await
        .unwrap();
    let id = saved.id.expect("id assigned");
    assert!(saved.is_admin);

    let by_email = repo.find_by_email("admin@tradinggrow.com").await.unwrap();
    assert_eq!(by_email.as_ref(), Some(&saved));
    assert_eq!(repo.find_by_id(id).await.unwrap(), Some(saved));
}

#[tokio::test]
async fn duplicate_email_is_a_repository_error() {
    let db = setup_db();
    let repo = SqliteUserRepository::new(db.database.get_pool().clone());
    let user = User::new("jane@example.com".into(), "Jane Trader".into());

    repo.save(&user).await.unwrap();
    let err = repo.save(&user).await.unwrap_err();
    assert!(matches!(err, DomainError::RepositoryError(_)));
}

#[tokio::test]
async fn watchlist_persists_stocks_in_order() {
    let db = setup_db();
    let pool = db.database.get_pool().clone();
    let users = SqliteUserRepository::new(pool.clone());
    let repo = SqliteWatchlistRepository::new(pool);

    let owner = users
        .save(&User::new("jane@example.com".into(), "Jane Trader".into()))
        .await
        .unwrap()
        .id
        .unwrap();

    let created = repo
        .save(&Watchlist::new("Entries".into(), owner, WatchlistType::Entry))
        .await
        .unwrap();
    assert!(created.id.is_some());
    assert!(created.stocks.is_empty());
    assert_eq!(created.created_at, created.updated_at);

    let mut watchlist = created.clone();
    watchlist.add_stock(nflx()).unwrap();
    watchlist
        .add_stock(StockEntry::new("AAPL", "Apple Inc.", "Technology", dec!(175.50)).unwrap())
        .unwrap();
    repo.update(&watchlist).await.unwrap();

    let stored = repo
        .find_by_user_and_type(owner, WatchlistType::Entry)
        .await
        .unwrap()
        .expect("entry watchlist");
    assert_eq!(stored.symbols(), vec!["NFLX", "AAPL"]);
    assert_eq!(stored.stock("NFLX"), Some(&nflx()));
    assert_eq!(stored.created_at, created.created_at);
    assert!(stored.updated_at >= created.updated_at);

    assert_eq!(
        repo.find_by_user_and_type(owner, WatchlistType::Breakout)
            .await
            .unwrap(),
        None
    );
    assert_eq!(repo.find_by_user(owner).await.unwrap().len(), 1);
}

#[tokio::test]
async fn second_watchlist_of_same_type_is_rejected() {
    let db = setup_db();
    let pool = db.database.get_pool().clone();
    let users = SqliteUserRepository::new(pool.clone());
    let repo = SqliteWatchlistRepository::new(pool);
    let owner = users
        .save(&User::new("jane@example.com".into(), "Jane Trader".into()))
        .await
        .unwrap()
        .id
        .unwrap();

    repo.save(&Watchlist::new("First".into(), owner, WatchlistType::Breakout))
        .await
        .unwrap();
    let err = repo
        .save(&Watchlist::new("Second".into(), owner, WatchlistType::Breakout))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::RepositoryError(_)));
}

#[tokio::test]
async fn update_of_missing_watchlist_is_not_found() {
    let db = setup_db();
    let repo = SqliteWatchlistRepository::new(db.database.get_pool().clone());

    let mut ghost = Watchlist::new("Ghost".into(), 1, WatchlistType::Entry);
    ghost.id = Some(404);

    let err = repo.update(&ghost).await.unwrap_err();
    assert_eq!(err, DomainError::WatchlistNotFound(404));
}
