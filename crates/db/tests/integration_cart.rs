//! Integration-Tests fuer CartRepository (In-Memory SQLite)

use kaufhaus_db::{
    models::{NeuerBenutzer, NeuerWarenkorbEintrag, NeuesProdukt},
    CartRepository, DbError, ProductRepository, SqliteDb, UserRepository,
};

async fn db() -> SqliteDb {
    SqliteDb::in_memory()
        .await
        .expect("In-Memory DB konnte nicht erstellt werden")
}

/// Legt einen Benutzer und zwei Produkte an
async fn fixtures(db: &SqliteDb) -> (kaufhaus_core::BenutzerId, Vec<kaufhaus_core::ProduktId>) {
    let user = UserRepository::create(
        db,
        NeuerBenutzer {
            username: "haendler",
            password_hash: "hash",
        },
    )
    .await
    .unwrap();

    let mut produkte = Vec::new();
    for name in ["Tee", "Honig"] {
        let p = ProductRepository::create(
            db,
            NeuesProdukt {
                name,
                description: "Lebensmittel",
                price: 4.50,
                stock: 10,
            },
        )
        .await
        .unwrap();
        produkte.push(p.id);
    }

    (user.id, produkte)
}

#[tokio::test]
async fn eintrag_hinzufuegen_und_auflisten() {
    let db = db().await;
    let (user_id, produkte) = fixtures(&db).await;

    let eintrag = CartRepository::add(
        &db,
        NeuerWarenkorbEintrag {
            user_id,
            product_id: produkte[0],
            quantity: 2,
        },
    )
    .await
    .expect("Eintrag hinzufuegen fehlgeschlagen");

    assert_eq!(eintrag.quantity, 2);

    let korb = CartRepository::list_for_user(&db, user_id).await.unwrap();
    assert_eq!(korb.len(), 1);
    assert_eq!(korb[0].product_id, produkte[0]);
}

#[tokio::test]
async fn eintrag_aktualisieren() {
    let db = db().await;
    let (user_id, produkte) = fixtures(&db).await;

    let eintrag = CartRepository::add(
        &db,
        NeuerWarenkorbEintrag {
            user_id,
            product_id: produkte[0],
            quantity: 1,
        },
    )
    .await
    .unwrap();

    let aktualisiert = CartRepository::update(&db, eintrag.id, produkte[1], 5)
        .await
        .unwrap();

    assert_eq!(aktualisiert.product_id, produkte[1]);
    assert_eq!(aktualisiert.quantity, 5);
}

#[tokio::test]
async fn update_unbekannter_eintrag() {
    let db = db().await;
    let (_, produkte) = fixtures(&db).await;

    let err = CartRepository::update(
        &db,
        kaufhaus_core::WarenkorbEintragId::new(),
        produkte[0],
        1,
    )
    .await;
    assert!(matches!(err, Err(DbError::NichtGefunden(_))));
}

#[tokio::test]
async fn eintrag_entfernen() {
    let db = db().await;
    let (user_id, produkte) = fixtures(&db).await;

    let eintrag = CartRepository::add(
        &db,
        NeuerWarenkorbEintrag {
            user_id,
            product_id: produkte[0],
            quantity: 1,
        },
    )
    .await
    .unwrap();

    assert!(CartRepository::delete(&db, eintrag.id).await.unwrap());
    let korb = CartRepository::list_for_user(&db, user_id).await.unwrap();
    assert!(korb.is_empty());
}

#[tokio::test]
async fn benutzer_loeschen_leert_warenkorb() {
    let db = db().await;
    let (user_id, produkte) = fixtures(&db).await;

    CartRepository::add(
        &db,
        NeuerWarenkorbEintrag {
            user_id,
            product_id: produkte[0],
            quantity: 3,
        },
    )
    .await
    .unwrap();

    UserRepository::delete(&db, user_id).await.unwrap();

    let korb = CartRepository::list_for_user(&db, user_id).await.unwrap();
    assert!(korb.is_empty(), "ON DELETE CASCADE muss den Korb leeren");
}
