use crate::owned_record::owned_record;

owned_record! {
    /// A short text note owned by a user.
    Scrap, kind = "scrap", draft = NewScrap, patch = ScrapPatch
}
