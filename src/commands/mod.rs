//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and writes its result to the given writer.

pub mod config;
pub mod count;
pub mod folders;
pub mod show;

// Re-export execute functions for convenience
pub use self::config::execute as config;
pub use count::execute as count;
pub use folders::execute as folders;
pub use show::execute as show;

use crate::{
    MarktableError,
    cli::{FilterArgs, SourceArgs},
    config::MarktableConfig,
    filters::ExclusionSet,
    source::BookmarkFile,
    table::BookmarkTable,
};

type Result<T> = std::result::Result<T, MarktableError>;

/// Pick the bookmark file from the arguments, falling back to the config
///
/// # Errors
/// Returns `InvalidInput` if neither names a file.
pub fn resolve_source(config: &MarktableConfig, source: &SourceArgs) -> Result<BookmarkFile> {
    let path = source
        .file
        .clone()
        .or_else(|| config.bookmarks_file.clone())
        .ok_or_else(|| {
            MarktableError::InvalidInput(
                "No bookmark file given. Pass FILE or run `marktable config set-file FILE`".to_string(),
            )
        })?;
    Ok(BookmarkFile::new(path).with_layout(source.layout.into()))
}

/// Load bookmarks and apply the folder selector and exclusions
///
/// Saved exclusions from the config come first, followed by `--exclude`
/// entries (each may be a comma separated list).
///
/// # Errors
/// Returns an error if no file is given or the bookmark file cannot be read.
pub fn build_table(
    config: &MarktableConfig,
    source: &SourceArgs,
    filter: &FilterArgs,
) -> Result<BookmarkTable> {
    let file = resolve_source(config, source)?;

    let mut exclusions = if filter.no_saved_excludes {
        ExclusionSet::new()
    } else {
        config.exclusions()
    };
    for entry in &filter.exclude {
        exclusions.insert_list(entry);
    }

    let mut table = BookmarkTable::with_exclusions(exclusions);
    table.load(&file)?;

    let selector = filter.selector();
    if !table.folder_options().iter().any(|o| o.selector == selector) {
        tracing::warn!(folder = %selector.option_value(), "no bookmarks are filed directly in this folder");
    }
    table.set_inclusion_filter(selector);

    Ok(table)
}

/// Load bookmarks without any filtering
///
/// # Errors
/// Returns an error if no file is given or the bookmark file cannot be read.
pub fn load_table(config: &MarktableConfig, source: &SourceArgs) -> Result<BookmarkTable> {
    let file = resolve_source(config, source)?;
    let mut table = BookmarkTable::new();
    table.load(&file)?;
    Ok(table)
}
