use crate::owned_record::owned_record;

owned_record! {
    /// A to-do item owned by a user.
    Task, kind = "task", draft = NewTask, patch = TaskPatch
}
