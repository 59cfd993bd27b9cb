pub mod member;
pub mod trainer;
pub mod class;
pub mod attendance;

pub use member::{CreateMemberRequest, Member, MemberResponse, UpdateMemberRequest};
pub use trainer::{CreateTrainerRequest, Trainer, TrainerResponse, UpdateTrainerRequest};
pub use class::{AssignTrainerRequest, Class, ClassResponse, CreateClassRequest, PopularDay, UpdateClassRequest};
pub use attendance::{AddMemberRequest, Attendance};
