use clap::ValueEnum;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FilterMode {
    All,
    Free,
    Used,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
