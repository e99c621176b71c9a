#![forbid(unsafe_code)]

//! Demo: a simulated browsing session rendered as an animated breadcrumb
//! row on the current terminal.
//!
//! The trail persists in a JSON file under the system temp directory, so
//! running the demo twice continues the same session. Set `RUST_LOG=debug`
//! to watch the structured visit/append logs on stderr.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use web_time::Instant;

use crumbtrail_core::ansi;
use crumbtrail_core::buffer::Buffer;
use crumbtrail_core::geometry::Rect;
use crumbtrail_core::page::StaticPage;
use crumbtrail_widgets::{BreadcrumbConfig, BreadcrumbWidget, TrailStore};

const ROW_WIDTH: u16 = 100;
const FRAME: Duration = Duration::from_millis(16);

/// Key/value store backed by a single JSON file: a map of storage keys to
/// stored values, rewritten on every set. Read and write failures degrade
/// to an empty store with a warning; the widget never sees them.
struct JsonFileStore {
    path: PathBuf,
    slots: BTreeMap<String, String>,
}

impl JsonFileStore {
    fn open(path: PathBuf) -> Self {
        let slots = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(slots) => slots,
                Err(error) => {
                    tracing::warn!(message = "store.file.undecodable", path = %path.display(), error = %error);
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, slots }
    }

    fn persist(&self) {
        let encoded = match serde_json::to_string_pretty(&self.slots) {
            Ok(encoded) => encoded,
            Err(error) => {
                tracing::warn!(message = "store.file.unencodable", error = %error);
                return;
            }
        };
        if let Err(error) = std::fs::write(&self.path, encoded) {
            tracing::warn!(message = "store.file.write_failed", path = %self.path.display(), error = %error);
        }
    }
}

impl TrailStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.slots.insert(key.to_string(), value);
        self.persist();
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut store = JsonFileStore::open(std::env::temp_dir().join("crumbtrail-demo.json"));
    let config = BreadcrumbConfig::new()
        .levels(3)
        .show_home(true)
        .home_url("https://site/")
        .easing("easeOutBounce");
    let mut widget = BreadcrumbWidget::new(config);

    let pages = [
        StaticPage::new("https://site/Dashboard"),
        StaticPage::new("https://site/ProviderConfiguration"),
        StaticPage::new("https://site/Users/EditUser/64918c0d-b024-4225-8607-d5b822cf52be"),
        StaticPage::new("https://site/Reports?range=30d"),
        StaticPage::new("https://site/").document_title("Acme Portal"),
    ];

    let mut out = io::stdout().lock();
    for page in &pages {
        widget.visit(page, &mut store);
        animate_row(&mut widget, &mut out)?;
    }
    Ok(())
}

/// Play the reveal for the current trail on a single terminal row.
fn animate_row(widget: &mut BreadcrumbWidget, out: &mut impl Write) -> io::Result<()> {
    let area = Rect::from_size(ROW_WIDTH, 1);
    let mut last = Instant::now();
    loop {
        let mut buf = Buffer::new(ROW_WIDTH, 1);
        widget.render(area, &mut buf);
        let frame = ansi::present(&buf);
        write!(out, "\r\x1b[2K{}", frame.trim_end_matches('\n'))?;
        out.flush()?;

        if widget.is_settled() {
            writeln!(out)?;
            return Ok(());
        }
        thread::sleep(FRAME);
        let now = Instant::now();
        widget.tick(now - last);
        last = now;
    }
}
