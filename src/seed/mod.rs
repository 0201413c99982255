//! Seed datasets
//!
//! The admin engine has no persistence layer: these fixed collections are the
//! sole data source. Every page clones its seed at construction, mutates the
//! local copy, and a fresh construction ("reload") restores the originals.

use crate::models::account::{SubscriptionTier, User, UserStatus};
use crate::models::billing::{
    PaymentMethod, PlanDuration, SubscriptionPlan, Transaction, TransactionStatus,
};
use crate::models::catalog::{ModuleCode, Question, QuestionType, Series, TcfModule};
use crate::models::media::{MediaItem, MediaType};
use crate::models::messaging::{
    ChatMessage, Conversation, ConversationStatus, MessageSender,
};
use crate::models::metrics::{ActivityLogEntry, ChartPoint, StatMetric};

fn module(
    id: &str,
    name: &str,
    code: ModuleCode,
    description: &str,
    question_count: u32,
    duration_minutes: u32,
) -> TcfModule {
    TcfModule {
        id: id.to_string(),
        name: name.to_string(),
        code,
        description: description.to_string(),
        question_count,
        duration_minutes,
    }
}

/// The four fixed test sections. Static catalog, never mutated at runtime.
pub fn modules() -> Vec<TcfModule> {
    vec![
        module("1", "Compréhension Orale", ModuleCode::CO, "Écoute et analyse audio", 39, 35),
        module("2", "Compréhension Écrite", ModuleCode::CE, "Lecture et textes à trous", 39, 60),
        module("3", "Expression Écrite", ModuleCode::EE, "Rédaction de tâches", 3, 60),
        module("4", "Expression Orale", ModuleCode::EO, "Entretien individuel", 3, 12),
    ]
}

#[allow(clippy::too_many_arguments)]
fn series_row(
    id: &str,
    module_id: ModuleCode,
    title: &str,
    description: &str,
    question_count: u32,
    is_premium: bool,
    is_active: bool,
    last_updated: &str,
) -> Series {
    Series {
        id: id.to_string(),
        module_id,
        title: title.to_string(),
        description: Some(description.to_string()),
        question_count,
        is_premium,
        is_active,
        last_updated: last_updated.to_string(),
    }
}

pub fn series() -> Vec<Series> {
    vec![
        series_row("s1", ModuleCode::CE, "Série 1 - Découverte", "Idéal pour débuter", 39, false, true, "2023-10-01"),
        series_row("s2", ModuleCode::CE, "Série 2 - Intermédiaire", "Niveau B1-B2", 39, true, true, "2023-10-05"),
        series_row("s3", ModuleCode::CE, "Série 3 - Avancé", "Niveau C1-C2", 39, true, false, "2023-10-10"),
        series_row("s4", ModuleCode::CO, "Série Audio 1", "Dialogues du quotidien", 39, false, true, "2023-10-02"),
        series_row("s5", ModuleCode::CO, "Série Audio 2", "Interviews et radio", 39, true, true, "2023-10-08"),
        series_row("s6", ModuleCode::EE, "Tâches d'écriture 1", "Courriels et articles", 3, true, true, "2023-09-25"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn question_row(
    id: &str,
    text: &str,
    module_id: ModuleCode,
    series_id: &str,
    difficulty: u8,
    kind: QuestionType,
    points: u8,
    choices: &[&str],
    correct_answer: usize,
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        module_id,
        series_id: series_id.to_string(),
        difficulty,
        kind,
        points,
        choices: choices.iter().map(|c| c.to_string()).collect(),
        correct_answer,
        audio_url: None,
        image_url: None,
    }
}

pub fn questions() -> Vec<Question> {
    vec![
        question_row(
            "q1",
            "Quelle est l'intention de l'auteur ?",
            ModuleCode::CE,
            "s1",
            4,
            QuestionType::Qcm,
            15,
            &["Informer", "Convaincre", "Divertir", "Critiquer"],
            1,
        ),
        question_row(
            "q2",
            "Complétez la phrase suivante...",
            ModuleCode::CE,
            "s1",
            2,
            QuestionType::Qcm,
            9,
            &["est allé", "a allé", "suis allé", "vont"],
            0,
        ),
        question_row(
            "q3",
            "Écoutez le dialogue. Où se passe la scène ?",
            ModuleCode::CO,
            "s4",
            3,
            QuestionType::Audio,
            9,
            &["À la gare", "Au restaurant", "À la banque", "Au cinéma"],
            2,
        ),
        question_row(
            "q4",
            "Décrivez cette image.",
            ModuleCode::EO,
            "s6",
            1,
            QuestionType::Image,
            3,
            &[],
            0,
        ),
        question_row(
            "q5",
            "Rédigez un courriel de réclamation.",
            ModuleCode::EE,
            "s6",
            5,
            QuestionType::Qcm,
            26,
            &["Option A", "Option B", "Option C", "Option D"],
            0,
        ),
        question_row(
            "q6",
            "Quel est le synonyme du mot souligné ?",
            ModuleCode::CE,
            "s1",
            1,
            QuestionType::Qcm,
            3,
            &["Grand", "Petit", "Rapide", "Lent"],
            0,
        ),
        question_row(
            "q7",
            "Que signifie cette expression ?",
            ModuleCode::CE,
            "s1",
            3,
            QuestionType::Qcm,
            9,
            &["Être heureux", "Être triste", "Être en colère", "Être fatigué"],
            3,
        ),
    ]
}

fn user_row(
    id: &str,
    name: &str,
    email: &str,
    status: UserStatus,
    subscription: SubscriptionTier,
    last_login: &str,
    progress: u8,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        status,
        subscription,
        last_login: last_login.to_string(),
        progress,
    }
}

pub fn users() -> Vec<User> {
    vec![
        user_row("u1", "Jean Dupont", "jean.d@example.com", UserStatus::Active, SubscriptionTier::Monthly, "2023-10-25", 65),
        user_row("u2", "Marie Curie", "m.curie@science.fr", UserStatus::Active, SubscriptionTier::Annual, "2023-10-24", 88),
        user_row("u3", "Ousmane Dembélé", "ousmane@foot.com", UserStatus::Inactive, SubscriptionTier::Free, "2023-10-20", 12),
        user_row("u4", "Sophie Marceau", "sophie@actor.fr", UserStatus::Banned, SubscriptionTier::Free, "2023-09-15", 45),
        user_row("u5", "Victor Hugo", "v.hugo@lesmis.fr", UserStatus::Active, SubscriptionTier::Weekly, "2023-10-26", 30),
    ]
}

fn tx_row(
    id: &str,
    user_id: &str,
    user_name: &str,
    amount: i64,
    date: &str,
    status: TransactionStatus,
    method: PaymentMethod,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        amount,
        currency: "XOF".to_string(),
        date: date.to_string(),
        status,
        method,
    }
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        tx_row("tx_1", "u1", "Jean Dupont", 15000, "2023-10-25", TransactionStatus::Success, PaymentMethod::Om),
        tx_row("tx_2", "u5", "Victor Hugo", 5000, "2023-10-24", TransactionStatus::Success, PaymentMethod::Momo),
        tx_row("tx_3", "u3", "Ousmane Dembélé", 5000, "2023-10-23", TransactionStatus::Failed, PaymentMethod::Visa),
        tx_row("tx_4", "u2", "Marie Curie", 45000, "2023-10-20", TransactionStatus::Success, PaymentMethod::Visa),
    ]
}

fn plan_row(
    id: &str,
    name: &str,
    price: i64,
    duration: PlanDuration,
    features: &[&str],
    highlight: bool,
) -> SubscriptionPlan {
    SubscriptionPlan {
        id: id.to_string(),
        name: name.to_string(),
        price,
        currency: "CFA".to_string(),
        duration,
        features: features.iter().map(|f| f.to_string()).collect(),
        active: true,
        highlight,
    }
}

pub fn plans() -> Vec<SubscriptionPlan> {
    vec![
        plan_row(
            "plan_1",
            "Découverte (24h)",
            1500,
            PlanDuration::Daily,
            &["Accès 24h complet", "1 Examen blanc", "Correction instantanée", "Sans engagement"],
            false,
        ),
        plan_row(
            "plan_2",
            "Intensif Hebdo",
            5000,
            PlanDuration::Weekly,
            &["Accès 7 jours", "Examens illimités", "Statistiques détaillées", "Support prioritaire"],
            true,
        ),
        plan_row(
            "plan_3",
            "Maîtrise Mensuelle",
            15000,
            PlanDuration::Monthly,
            &["Accès 30 jours", "Mode entraînement ciblé", "Tous les modules", "Garantie réussite", "Certificat blanc"],
            false,
        ),
    ]
}

fn msg(id: &str, text: &str, sender: MessageSender, timestamp: &str, read: bool) -> ChatMessage {
    ChatMessage {
        id: id.to_string(),
        text: text.to_string(),
        sender,
        timestamp: timestamp.to_string(),
        read,
    }
}

pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: "c1".to_string(),
            user_id: "u1".to_string(),
            user_name: "Jean Dupont".to_string(),
            user_email: "jean.d@example.com".to_string(),
            avatar: None,
            last_message: "Merci pour votre réponse rapide.".to_string(),
            last_message_time: "10:30".to_string(),
            unread_count: 0,
            status: ConversationStatus::Closed,
            messages: vec![
                msg("m1", "Bonjour, j'ai un problème avec mon paiement.", MessageSender::User, "10:00", true),
                msg("m2", "Bonjour Jean, quel est le souci exactement ?", MessageSender::Admin, "10:15", true),
                msg("m3", "C'est réglé, merci !", MessageSender::User, "10:30", true),
                msg("m4", "Merci pour votre réponse rapide.", MessageSender::User, "10:30", true),
            ],
        },
        Conversation {
            id: "c2".to_string(),
            user_id: "u3".to_string(),
            user_name: "Ousmane Dembélé".to_string(),
            user_email: "ousmane@foot.com".to_string(),
            avatar: None,
            last_message: "Comment puis-je changer mon mot de passe ?".to_string(),
            last_message_time: "09:45".to_string(),
            unread_count: 2,
            status: ConversationStatus::Active,
            messages: vec![
                msg("m1", "Bonjour l'équipe.", MessageSender::User, "09:40", true),
                msg("m2", "Comment puis-je changer mon mot de passe ?", MessageSender::User, "09:45", false),
            ],
        },
        Conversation {
            id: "c3".to_string(),
            user_id: "u5".to_string(),
            user_name: "Victor Hugo".to_string(),
            user_email: "v.hugo@lesmis.fr".to_string(),
            avatar: None,
            last_message: "Je ne trouve pas le module EE.".to_string(),
            last_message_time: "Hier".to_string(),
            unread_count: 0,
            status: ConversationStatus::Active,
            messages: vec![
                msg("m1", "Je ne trouve pas le module EE.", MessageSender::User, "Hier", true),
            ],
        },
    ]
}

fn media_row(
    id: &str,
    name: &str,
    kind: MediaType,
    url: &str,
    size: &str,
    date: &str,
    dimensions: Option<&str>,
    duration: Option<&str>,
) -> MediaItem {
    MediaItem {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        url: url.to_string(),
        size: size.to_string(),
        date: date.to_string(),
        dimensions: dimensions.map(|d| d.to_string()),
        duration: duration.map(|d| d.to_string()),
    }
}

/// Assets already present in durable storage when the console opens
pub fn media_items() -> Vec<MediaItem> {
    vec![
        media_row("media_1", "dialogue_gare.mp3", MediaType::Audio, "/media/audio/dialogue_gare.mp3", "3.2 MB", "2023-10-02", None, Some("02:45")),
        media_row("media_2", "interview_radio.mp3", MediaType::Audio, "/media/audio/interview_radio.mp3", "5.1 MB", "2023-10-08", None, Some("04:12")),
        media_row("media_3", "affiche_exposition.jpg", MediaType::Image, "/media/images/affiche_exposition.jpg", "1.8 MB", "2023-09-28", Some("1920x1080"), None),
        media_row("media_4", "plan_quartier.png", MediaType::Image, "/media/images/plan_quartier.png", "950 KB", "2023-10-12", Some("1200x800"), None),
        media_row("media_5", "consignes_ee.pdf", MediaType::Document, "/media/documents/consignes_ee.pdf", "240 KB", "2023-09-25", None, None),
    ]
}

fn metric(label: &str, value: &str, trend: f32, trend_label: &str) -> StatMetric {
    StatMetric {
        label: label.to_string(),
        value: value.to_string(),
        trend,
        trend_label: trend_label.to_string(),
    }
}

/// Dashboard KPI tiles. Presentation constants, not derived from live data.
pub fn dashboard_metrics() -> Vec<StatMetric> {
    vec![
        metric("Revenu (7j)", "450 000 CFA", 12.5, "vs semaine dernière"),
        metric("Utilisateurs Actifs", "1,248", 8.2, "nouveaux ce mois"),
        metric("Exercices Complétés", "854", -2.4, "baisse légère"),
        metric("Taux de Réussite", "64%", 1.8, "moyenne globale"),
    ]
}

fn point(name: &str, value: i64) -> ChartPoint {
    ChartPoint {
        name: name.to_string(),
        value,
    }
}

pub fn revenue_chart() -> Vec<ChartPoint> {
    vec![
        point("Lun", 40000),
        point("Mar", 30000),
        point("Mer", 55000),
        point("Jeu", 45000),
        point("Ven", 80000),
        point("Sam", 65000),
        point("Dim", 95000),
    ]
}

pub fn activity_chart() -> Vec<ChartPoint> {
    vec![
        point("CE", 120),
        point("CO", 98),
        point("EE", 45),
        point("EO", 30),
    ]
}

pub fn activity_log() -> Vec<ActivityLogEntry> {
    (1..=5)
        .map(|i| ActivityLogEntry {
            timestamp: format!("2023-10-2{} 14:30:00", i),
            category: "ADMIN_ACTION".to_string(),
            message: "Mise à jour configuration système".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shapes() {
        assert_eq!(modules().len(), 4);
        assert_eq!(series().len(), 6);
        assert_eq!(questions().len(), 7);
        assert_eq!(users().len(), 5);
        assert_eq!(transactions().len(), 4);
        assert_eq!(plans().len(), 3);
        assert_eq!(conversations().len(), 3);
        assert_eq!(revenue_chart().len(), 7);
    }

    #[test]
    fn test_seed_ids_unique() {
        let mut ids: Vec<String> = questions().into_iter().map(|q| q.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_questions_reference_seeded_series() {
        let series_ids: Vec<String> = series().into_iter().map(|s| s.id).collect();
        for question in questions() {
            assert!(series_ids.contains(&question.series_id));
        }
    }

    #[test]
    fn test_points_on_fixed_scale() {
        for question in questions() {
            assert!(crate::models::catalog::POINT_SCALE.contains(&question.points));
        }
    }
}
