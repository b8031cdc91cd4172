pub mod walk_delegation;

pub use walk_delegation::WalkDelegationUseCase;
