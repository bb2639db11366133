//! Background thread that polls the proxy and publishes boards.

use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::{debug, info, warn};
use trainspotter_common::Board;
use trainspotter_common::board::UNREACHABLE_MESSAGE;

use crate::timing::REQUEST_TIMEOUT;

/// Board shared between the poller thread and the render loop.
pub type SharedBoard = Arc<Mutex<Board>>;

/// Fetch `url` once and decode the body.
///
/// Transport failures map to the same message the device shows.
pub fn fetch(
    client: &Client,
    url: &str,
) -> Board {
    let body = client
        .get(url)
        .send()
        .and_then(|response| response.bytes());

    match body {
        Ok(bytes) => Board::from_json(&bytes),
        Err(err) => {
            warn!(error = %err, "Request to proxy failed");
            Board::error(UNREACHABLE_MESSAGE)
        }
    }
}

/// Replace the shared board. A poisoned lock is recovered, since the board is
/// always overwritten whole.
pub fn publish(
    shared: &SharedBoard,
    board: Board,
) {
    let mut guard = shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = board;
}

/// Copy of the current board.
pub fn snapshot(shared: &SharedBoard) -> Board { shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone() }

/// Start polling `url` every `interval` on a background thread.
pub fn spawn(
    url: String,
    interval: Duration,
    shared: SharedBoard,
) -> Result<JoinHandle<()>> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    thread::Builder::new()
        .name("poller".into())
        .spawn(move || {
            info!(%url, interval_secs = interval.as_secs(), "Poller started");
            loop {
                let board = fetch(&client, &url);
                match &board {
                    Board::Departures(list) => debug!(destinations = list.len(), "Fetched departures"),
                    Board::Error(message) => warn!(%message, "Board error"),
                    Board::Waiting => {}
                }
                publish(&shared, board);
                thread::sleep(interval);
            }
        })
        .context("Failed to spawn poller thread")
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    use super::*;

    /// Serve one HTTP response on a local port and return its URL.
    fn serve_once(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/")
    }

    #[test]
    fn test_fetch_decodes_body() {
        let url = serve_once(r#"{"Dublin/Pleasanton": ["6", "Leaving"]}"#);
        let board = fetch(&Client::new(), &url);

        let destinations = board.destinations();
        assert_eq!(destinations.len(), 1);
        assert_eq!(destinations[0].name.as_str(), "Dublin/Pleasanton");
        assert_eq!(destinations[0].etas.as_slice(), &[0, 6]);
    }

    #[test]
    fn test_fetch_unreachable() {
        // Bind then drop to get a port nothing listens on
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let board = fetch(&Client::new(), &format!("http://127.0.0.1:{port}/"));
        assert_eq!(board, Board::error(UNREACHABLE_MESSAGE));
    }

    #[test]
    fn test_publish_replaces_board() {
        let shared: SharedBoard = Arc::new(Mutex::new(Board::Waiting));
        publish(&shared, Board::error("No station data found"));
        assert_eq!(snapshot(&shared), Board::error("No station data found"));
    }
}
