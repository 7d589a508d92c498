pub mod handlers;
pub mod hint_helper;
pub mod illustration;
pub mod onboarding;
pub mod renderer;
pub mod splash;
