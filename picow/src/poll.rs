//! Turning one proxy request into the board to publish.

use trainspotter_common::Board;
use trainspotter_common::board::UNREACHABLE_MESSAGE;

/// Board for the outcome of one request.
///
/// A body is decoded whatever the HTTP status, since the proxy reports its own
/// failures inside the JSON. Any transport failure (DNS, connect, TLS, timeout,
/// oversize response) becomes the fixed "cannot reach the server" error.
pub fn board_from_fetch<E>(result: Result<&[u8], E>) -> Board {
    match result {
        Ok(body) => Board::from_json(body),
        Err(_) => Board::error(UNREACHABLE_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_is_decoded() {
        let board = board_from_fetch::<()>(Ok(br#"{"Millbrae": ["3", "Leaving"]}"#));
        let destinations = board.destinations();
        assert_eq!(destinations.len(), 1);
        assert_eq!(destinations[0].etas.as_slice(), &[0, 3]);
    }

    #[test]
    fn test_proxy_error_is_passed_through() {
        let board = board_from_fetch::<()>(Ok(br#"{"Error": "No station data found"}"#));
        assert_eq!(board, Board::error("No station data found"));
    }

    #[test]
    fn test_transport_failure() {
        let board = board_from_fetch::<&str>(Err("dns"));
        assert_eq!(board, Board::error(UNREACHABLE_MESSAGE));
        assert_eq!(
            board.message().unwrap().as_str(),
            "Error: There was an issue calling the server from this device."
        );
    }

    #[test]
    fn test_garbage_body_is_an_error_board() {
        let board = board_from_fetch::<()>(Ok(b"<html>502</html>"));
        assert!(matches!(board, Board::Error(_)));
    }
}
