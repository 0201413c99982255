//! Domain models for the admin engine

pub mod account;
pub mod billing;
pub mod catalog;
pub mod media;
pub mod messaging;
pub mod metrics;

pub use account::{SubscriptionTier, User, UserStatus};
pub use billing::{PaymentMethod, PlanDuration, SubscriptionPlan, Transaction, TransactionStatus};
pub use catalog::{ModuleCode, Question, QuestionType, Series, TcfModule, POINT_SCALE};
pub use media::{FileUpload, MediaItem, MediaType};
pub use messaging::{ChatMessage, Conversation, ConversationStatus, MessageSender};
pub use metrics::{ActivityLogEntry, ChartPoint, StatMetric};
