use app_web::web_service;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match web_service().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Web service failed: {}", e.message);
            ExitCode::FAILURE
        }
    }
}
