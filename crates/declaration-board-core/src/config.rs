/// How concurrent list responses are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadOrdering {
    /// Every response replaces the list; the last one to resolve wins.
    #[default]
    LastResolvedWins,
    /// Responses older than the last applied one are discarded.
    LatestIssuedWins,
}

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub display_cap: usize,
    pub placeholder_rows: usize,
    pub reload_delay_ms: u64,
    pub load_ordering: LoadOrdering,
    pub explorer_tx_url: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            display_cap: 10,
            placeholder_rows: 4,
            reload_delay_ms: 2_000,
            load_ordering: LoadOrdering::default(),
            explorer_tx_url: "https://explorer.arkiv.network/tx".to_owned(),
        }
    }
}
