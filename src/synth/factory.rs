use crate::graph::node::GraphNode;

/// Factory for creating identical voices for the pool.
pub trait VoiceFactory: Send {
    type Voice: GraphNode;

    fn create_voice(&self) -> Self::Voice;
}

impl<F, T> VoiceFactory for F
where
    F: Fn() -> T + Send,
    T: GraphNode,
{
    type Voice = T;

    fn create_voice(&self) -> Self::Voice {
        self()
    }
}
