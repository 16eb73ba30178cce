use nutricoach_core::coach::NutriCoach;
use nutricoach_core::model::ModelProvider;
use std::sync::Arc;

pub(crate) struct ServerState<P: ModelProvider> {
    coach: Arc<NutriCoach<P>>,
}

impl<P: ModelProvider> ServerState<P> {
    pub(crate) fn new(coach: Arc<NutriCoach<P>>) -> Self {
        Self { coach }
    }

    pub(crate) fn coach(&self) -> Arc<NutriCoach<P>> {
        Arc::clone(&self.coach)
    }
}
