//! End-to-end operator journey through the admin engine
//!
//! Exercises the pages together the way a console session would: log in,
//! navigate, edit the catalog, manage plans, assign a subscription, curate
//! media and answer a support conversation.

use primo_admin::config::Settings;
use primo_admin::models::billing::PlanDuration;
use primo_admin::models::media::FileUpload;
use primo_admin::pages::{
    CatalogState, DirectoryState, FinanceState, MediaFilter, MediaSlot, MediaSource, MediaState,
    MessagingState,
};
use primo_admin::state::{MemorySentinelStore, Route, SessionGate};
use primo_admin::AdminError;

fn settings() -> Settings {
    let mut settings = Settings::default();
    // Keep the simulated login delay out of the test clock
    settings.auth.login_delay_ms = 1;
    settings
}

#[tokio::test]
async fn test_full_operator_session() {
    let settings = settings();
    settings.validate().expect("default settings are valid");

    // Sign in
    let mut gate = SessionGate::new(MemorySentinelStore::new(), settings.auth.clone());
    assert!(!gate.is_authenticated());
    gate.login("admin@primo.cm", "secret").await.expect("login succeeds");
    assert!(gate.is_authenticated());

    // Land on the dashboard, then open the content manager
    assert_eq!(Route::parse("/"), Route::Dashboard);
    assert_eq!(Route::parse("/content"), Route::Content);

    // Catalog: add a question to the first CE series
    let mut catalog = CatalogState::new(settings.catalog.clone());
    catalog.select_series("s1").expect("seeded series exists");
    catalog.open_question_form(None).expect("series is selected");
    {
        let draft = catalog.question_form_mut().unwrap();
        draft.text = "Que signifie ce panneau ?".to_string();
        draft.choices = vec![
            "Entrée interdite".to_string(),
            "Sortie de secours".to_string(),
            "Parking".to_string(),
            String::new(),
        ];
        draft.correct_answer = 1;
    }
    catalog
        .attach_media(
            MediaSlot::Image,
            MediaSource::Library { url: "/media/images/plan_quartier.png".to_string() },
        )
        .expect("form is open");
    let question_id = catalog.save_question().expect("valid draft saves");
    assert!(catalog.visible_questions().iter().any(|q| q.id == question_id));

    // Finance: publish a new plan
    let mut finance = FinanceState::new(settings.storefront.clone());
    finance.create_plan();
    {
        let draft = finance.editing_mut().unwrap();
        draft.name = "Hebdomadaire Plus".to_string();
        draft.price = 2500;
        draft.duration = PlanDuration::Weekly;
    }
    finance.update_feature(0, "Toutes les séries CE et CO").expect("row exists");
    let plan_id = finance.save_plan().expect("valid plan saves");
    let plan = finance
        .plans()
        .iter()
        .find(|p| p.id == plan_id)
        .cloned()
        .expect("saved plan is listed");

    // Directory: hand that plan to a learner
    let mut directory = DirectoryState::new();
    directory.open_assign("u3").expect("seeded user exists");
    let tier = directory.assign_plan("u3", &plan).expect("assignment succeeds");
    assert_eq!(tier, plan.duration.tier());

    // Media: upload an asset and clean up an old one
    let mut media = MediaState::new();
    media.upload(vec![FileUpload {
        name: "oral_sujet_7.mp3".to_string(),
        mime: "audio/mpeg".to_string(),
        size_bytes: 4_200_000,
    }]);
    media.set_filter(MediaFilter::Audio);
    assert!(media.visible().iter().any(|item| item.name == "oral_sujet_7.mp3"));
    media.request_delete("media_5").expect("seeded item exists");
    media.confirm_delete().expect("staged delete goes through");

    // Messaging: answer the open conversation
    let mut inbox = MessagingState::new();
    let message_id = inbox
        .send("Votre accès a été prolongé, bonne préparation !")
        .expect("non-empty reply sends");
    assert_eq!(inbox.scroll_target(), Some(message_id.as_str()));

    // Sign out
    gate.logout();
    assert!(!gate.is_authenticated());
}

#[tokio::test]
async fn test_login_rejects_malformed_email() {
    let settings = settings();
    let mut gate = SessionGate::new(MemorySentinelStore::new(), settings.auth);
    let err = gate.login("not-an-email", "secret").await.unwrap_err();
    assert!(matches!(err, AdminError::Authentication(_)));
    assert!(!gate.is_authenticated());
}

#[test]
fn test_validation_failure_leaves_catalog_untouched() {
    let settings = settings();
    let mut catalog = CatalogState::new(settings.catalog);
    let before: Vec<String> = catalog.visible_series().iter().map(|s| s.id.clone()).collect();

    catalog.open_series_form(None).expect("form opens");
    let err = catalog.save_series().unwrap_err();
    assert!(matches!(err, AdminError::Validation(_)));

    let after: Vec<String> = catalog.visible_series().iter().map(|s| s.id.clone()).collect();
    assert_eq!(before, after);
}
