/// Root of an aggregate: display name plus the static naming used for
/// tables, not-found messages and UI titles.
pub trait AggregateRoot {
    /// Name shown in lists, pickers and logs
    fn display_name(&self) -> &str;

    /// Aggregate index, e.g. "a001"
    fn aggregate_index() -> &'static str;

    /// Collection name, e.g. "shop"
    fn collection_name() -> &'static str;

    /// Singular UI name, e.g. "Boutique"
    fn element_name() -> &'static str;

    /// Plural UI name, e.g. "Boutiques"
    fn list_name() -> &'static str;

    /// Full system name, used as the table name (e.g. "a001_shop")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
