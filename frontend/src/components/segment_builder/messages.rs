#[derive(Clone)]
pub enum Msg {
    SetName(String),
    ChoosePending(String),
    CommitPending,
    RemoveSelected(usize),
    ReplaceSelected(usize, String),
    Save,
    Cancel,
}
