mod evaluate_speeds;

pub use evaluate_speeds::EvaluateSpeedsUseCase;
