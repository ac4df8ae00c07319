#[derive(Debug, PartialEq, Clone, Copy)]
pub enum EngineState {
    Idle,     // No surface yet, nothing drawn
    Running,  // Redrawing every frame
    Disposed, // Torn down; frames are ignored
}
