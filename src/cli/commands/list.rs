use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use serde_json::{Value, json};
use tabled::builder::Builder;
use tracing::debug;

use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{apply_table_style, parse_key_value, truncate_with_ellipsis};
use crate::config::ToolkitConfig;
use crate::field::FieldAccess;
use crate::list::{ListController, ListView};
use crate::url_state::{MemoryNavigator, Navigator};

const MAX_CELL_WIDTH: usize = 40;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// JSON file containing an array of records
    pub file: PathBuf,
    /// Current query string, e.g. "q=rust&sort=created_at_desc&page=2"
    #[arg(long, default_value = "")]
    pub url: String,
    /// Parameter writes applied through the URL synchronizer (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
    /// Fields matched by the search query (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub search_fields: Vec<String>,
    /// Columns to display (comma-separated, dotted paths allowed)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,
    /// Items per page
    #[arg(long)]
    pub per_page: Option<usize>,
    /// Noun used in the summary line
    #[arg(long, default_value = "items")]
    pub item_name: String,
    /// Output format (table or json)
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Read a JSON array of records.
pub fn load_items(path: &Path) -> CliResult<Vec<Value>> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&contents).map_err(|source| CliError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(CliError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Show one page of `args.file` as a list page would render it.
pub fn list_items(args: &ListArgs, config: &ToolkitConfig) -> CliResult<String> {
    let items = load_items(&args.file)?;
    render_list(&items, args, config)
}

pub(crate) fn render_list(
    items: &[Value],
    args: &ListArgs,
    config: &ToolkitConfig,
) -> CliResult<String> {
    let mut options = config.list_options()?;
    if let Some(per_page) = args.per_page {
        options.items_per_page = per_page;
    }
    if !args.search_fields.is_empty() {
        options.search_fields = args.search_fields.clone();
    }

    let mut controller = ListController::new(
        MemoryNavigator::new(&args.url),
        config.url_params(),
        options,
    );

    let writes = args
        .set
        .iter()
        .map(|raw| parse_key_value(raw))
        .collect::<CliResult<Vec<_>>>()?;
    if !writes.is_empty() {
        debug!(count = writes.len(), "applying parameter writes");
        let url = controller.url_mut();
        let now = Instant::now();
        let flush_at = now + url.flush_delay();
        url.set_params(writes, now);
        url.poll(flush_at);
        controller.sync_from_url();
    }

    let view = controller.visible(items, Instant::now());
    // An out-of-range page resets during `visible`; write that back too.
    controller.url_mut().flush_now();
    let query = controller.url().navigator().query_string();

    match args.format.as_str() {
        "json" => Ok(serde_json::to_string_pretty(&json!({
            "items": view.items,
            "page": view.page,
            "total_pages": view.total_pages,
            "matched": view.matched,
            "summary": view.page_info.summary(&args.item_name),
            "query": query,
        }))?),
        _ => {
            let columns = if args.columns.is_empty() {
                default_columns(items)
            } else {
                args.columns.clone()
            };
            Ok(format!(
                "{}\n{} (page {} of {})\nURL: ?{}",
                format_table(&view, &columns),
                view.page_info.summary(&args.item_name),
                view.page,
                view.total_pages,
                query
            ))
        }
    }
}

/// Keys of the first record.
fn default_columns(items: &[Value]) -> Vec<String> {
    match items.first() {
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn format_table(view: &ListView<'_, Value>, columns: &[String]) -> String {
    if view.items.is_empty() {
        return "No matching records.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(String::as_str));
    for item in &view.items {
        builder.push_record(columns.iter().map(|column| {
            let text = item.field(column).to_text().unwrap_or_else(|| "-".to_string());
            truncate_with_ellipsis(&text, MAX_CELL_WIDTH)
        }));
    }

    let mut table = builder.build();
    apply_table_style(&mut table);
    table.to_string()
}
