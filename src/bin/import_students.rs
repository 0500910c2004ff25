// Small dev utility: bulk-import a local spreadsheet without starting the HTTP server.
//
// Usage:
//   cargo run --bin import_students -- <file.xlsx|file.csv> [db_path]
//
// db_path defaults to PLACEMENT_TRACKER_DB_PATH or the user data directory.

use placement_tracker::api::ApiError;
use placement_tracker::app::AppState;
use placement_tracker::config::get_default_db_path;
use placement_tracker::logging::{self, LogFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(LogFormat::Text);

    let mut args = std::env::args().skip(1);
    let file_path = args
        .next()
        .ok_or("usage: import_students <file.xlsx|file.csv> [db_path]")?;
    let db_path = args.next().unwrap_or_else(get_default_db_path);

    let state = AppState::new(db_path)?;
    match state.import_api.import_file(&file_path).await {
        Ok(response) => {
            println!("{}", response.message);
            Ok(())
        }
        Err(ApiError::ValidationError { message, errors }) => {
            eprintln!("{}", message);
            for error in &errors {
                eprintln!("  {}", error);
            }
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
