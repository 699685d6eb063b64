//! Integration-Tests fuer PurchaseRepository (In-Memory SQLite)

use kaufhaus_db::{
    models::{NeuerBenutzer, NeuerKauf, NeuesProdukt},
    DbError, ProductRepository, PurchaseRepository, SqliteDb, UserRepository,
};

async fn db() -> SqliteDb {
    SqliteDb::in_memory()
        .await
        .expect("In-Memory DB konnte nicht erstellt werden")
}

async fn benutzer(db: &SqliteDb) -> kaufhaus_core::BenutzerId {
    UserRepository::create(
        db,
        NeuerBenutzer {
            username: "kaeufer",
            password_hash: "hash",
        },
    )
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn kauf_erstellen_und_laden() {
    let db = db().await;
    let user_id = benutzer(&db).await;

    let kauf = PurchaseRepository::create(
        &db,
        NeuerKauf {
            user_id,
            product_id: None,
            total_price: 29.90,
        },
    )
    .await
    .expect("Kauf erstellen fehlgeschlagen");

    assert_eq!(kauf.total_price, 29.90);
    assert!(kauf.product_id.is_none());

    let geladen = PurchaseRepository::get_by_id(&db, kauf.id)
        .await
        .unwrap()
        .expect("Kauf sollte gefunden werden");
    assert_eq!(geladen.user_id, user_id);
}

#[tokio::test]
async fn kauf_mit_produkt_referenz() {
    let db = db().await;
    let user_id = benutzer(&db).await;

    let produkt = ProductRepository::create(
        &db,
        NeuesProdukt {
            name: "Lampe",
            description: "Schreibtischlampe",
            price: 39.00,
            stock: 5,
        },
    )
    .await
    .unwrap();

    let kauf = PurchaseRepository::create(
        &db,
        NeuerKauf {
            user_id,
            product_id: Some(produkt.id),
            total_price: 39.00,
        },
    )
    .await
    .unwrap();

    assert_eq!(kauf.product_id, Some(produkt.id));

    // Produkt loeschen: Referenz wird genullt, Kauf bleibt bestehen
    ProductRepository::delete(&db, produkt.id).await.unwrap();
    let geladen = PurchaseRepository::get_by_id(&db, kauf.id)
        .await
        .unwrap()
        .unwrap();
    assert!(geladen.product_id.is_none());
}

#[tokio::test]
async fn kaeufe_pro_benutzer_auflisten() {
    let db = db().await;
    let user_id = benutzer(&db).await;

    for preis in [10.0, 20.0, 30.0] {
        PurchaseRepository::create(
            &db,
            NeuerKauf {
                user_id,
                product_id: None,
                total_price: preis,
            },
        )
        .await
        .unwrap();
    }

    let kaeufe = PurchaseRepository::list_for_user(&db, user_id)
        .await
        .unwrap();
    assert_eq!(kaeufe.len(), 3);
}

#[tokio::test]
async fn gesamtpreis_aktualisieren() {
    let db = db().await;
    let user_id = benutzer(&db).await;

    let kauf = PurchaseRepository::create(
        &db,
        NeuerKauf {
            user_id,
            product_id: None,
            total_price: 15.00,
        },
    )
    .await
    .unwrap();

    let aktualisiert = PurchaseRepository::update_total(&db, kauf.id, 12.50)
        .await
        .unwrap();
    assert_eq!(aktualisiert.total_price, 12.50);

    let err = PurchaseRepository::update_total(&db, kaufhaus_core::KaufId::new(), 1.0).await;
    assert!(matches!(err, Err(DbError::NichtGefunden(_))));
}

#[tokio::test]
async fn kauf_loeschen() {
    let db = db().await;
    let user_id = benutzer(&db).await;

    let kauf = PurchaseRepository::create(
        &db,
        NeuerKauf {
            user_id,
            product_id: None,
            total_price: 5.00,
        },
    )
    .await
    .unwrap();

    assert!(PurchaseRepository::delete(&db, kauf.id).await.unwrap());
    assert!(PurchaseRepository::get_by_id(&db, kauf.id)
        .await
        .unwrap()
        .is_none());
}
