use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use vinyl_core::{seed_albums, AlbumId, NewAlbum};
use vinyl_storage::{AlbumStore, MySqlStore};
use vinyl_test_infra::mysql::{MySqlServer, MysqlConfig};

struct Fixture {
    _mysql: MySqlServer,
    store: MySqlStore,
}

impl Fixture {
    async fn start() -> Self {
        let mysql = MySqlServer::new(MysqlConfig::builder().build())
            .await
            .expect("start mysql");
        let url = mysql.database_url().await.expect("mysql url");
        let pool = connect_with_retry(&url).await;

        sqlx::query(include_str!("../ddl/mysql/albums.sql"))
            .execute(&pool)
            .await
            .expect("create schema");

        Self {
            _mysql: mysql,
            store: MySqlStore::new(pool),
        }
    }
}

async fn connect_with_retry(url: &str) -> sqlx::MySqlPool {
    let mut last_error = None;

    for _ in 0..20 {
        match MySqlPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
        {
            Ok(pool) => return pool,
            Err(err) => {
                last_error = Some(err);
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
        }
    }

    panic!("failed to connect mysql: {last_error:?}");
}

#[tokio::test]
async fn create_and_get_album() {
    let fixture = Fixture::start().await;

    let created = fixture
        .store
        .create(NewAlbum::new("Blue Train", "John Coltrane", 56.99))
        .await
        .unwrap();
    assert_eq!(created.id, AlbumId::Int(1));

    let got = fixture.store.get("1").await.unwrap().unwrap();
    assert_eq!(got, created);
}

#[tokio::test]
async fn get_returns_none_for_missing_album() {
    let fixture = Fixture::start().await;

    assert!(fixture.store.get("999").await.unwrap().is_none());
    assert!(fixture.store.get("abc").await.unwrap().is_none());

    fixture
        .store
        .create(NewAlbum::new("Jeru", "Gerry Mulligan", 17.99))
        .await
        .unwrap();
    assert!(fixture.store.get("01").await.unwrap().is_none());
    assert!(fixture.store.get("+1").await.unwrap().is_none());
}

#[tokio::test]
async fn created_ids_are_unique() {
    let fixture = Fixture::start().await;
    let mut ids = Vec::new();

    for i in 0..5 {
        let created = fixture
            .store
            .create(NewAlbum::new(format!("Take {i}"), "Quartet", 10.0))
            .await
            .unwrap();
        ids.push(created.id);
    }

    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn seed_if_empty_does_not_duplicate() {
    let fixture = Fixture::start().await;

    assert!(fixture.store.seed_if_empty(&seed_albums()).await.unwrap());
    assert!(!fixture.store.seed_if_empty(&seed_albums()).await.unwrap());

    assert_eq!(fixture.store.list().await.unwrap().len(), 3);
}
