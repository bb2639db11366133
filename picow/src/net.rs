//! HTTP polling of the proxy over the CYW43 network stack.

use defmt::{debug, warn};
use embassy_net::Stack;
use embassy_net::dns::DnsSocket;
use embassy_net::tcp::client::{TcpClient, TcpClientState};
use embassy_time::{Duration, with_timeout};
use reqwless::client::{HttpClient, TlsConfig, TlsVerify};
use reqwless::request::Method;
use trainspotter_common::Board;
use trainspotter_picow::config::{HTTP_RX_BUFFER_SIZE, HTTP_TIMEOUT_SECS, TLS_BUFFER_SIZE};
use trainspotter_picow::poll::board_from_fetch;

type Tcp<'a> = TcpClient<'a, 1, 1024, 1024>;

/// Receive and TLS buffers, kept in a `StaticCell` by the poll task.
pub struct HttpBuffers {
    rx: [u8; HTTP_RX_BUFFER_SIZE],
    tls_read: [u8; TLS_BUFFER_SIZE],
    tls_write: [u8; TLS_BUFFER_SIZE],
}

impl HttpBuffers {
    pub const fn new() -> Self {
        Self {
            rx: [0; HTTP_RX_BUFFER_SIZE],
            tls_read: [0; TLS_BUFFER_SIZE],
            tls_write: [0; TLS_BUFFER_SIZE],
        }
    }
}

/// GET `url` and decode the response into a board.
///
/// Never fails: transport errors and timeouts become the "cannot reach the
/// server" board.
pub async fn fetch_board(
    stack: Stack<'static>,
    url: &str,
    seed: u64,
    buffers: &mut HttpBuffers,
) -> Board {
    let HttpBuffers { rx, tls_read, tls_write } = buffers;

    let client_state = TcpClientState::<1, 1024, 1024>::new();
    let tcp = TcpClient::new(stack, &client_state);
    let dns = DnsSocket::new(stack);
    let tls = TlsConfig::new(seed, tls_read, tls_write, TlsVerify::None);
    let mut client = HttpClient::new_with_tls(&tcp, &dns, tls);

    match with_timeout(Duration::from_secs(HTTP_TIMEOUT_SECS), read_body(&mut client, url, rx)).await {
        Ok(result) => {
            if let Err(err) = &result {
                warn!("Request failed: {}", err);
            }
            board_from_fetch(result)
        }
        Err(_) => {
            warn!("Request timed out after {}s", HTTP_TIMEOUT_SECS);
            board_from_fetch::<()>(Err(()))
        }
    }
}

async fn read_body<'buf>(
    client: &mut HttpClient<'_, Tcp<'_>, DnsSocket<'_>>,
    url: &str,
    rx: &'buf mut [u8],
) -> Result<&'buf [u8], reqwless::Error> {
    let mut request = client.request(Method::GET, url).await?;
    let response = request.send(rx).await?;
    debug!("Proxy answered {}", response.status);
    let body = response.body().read_to_end().await?;
    Ok(body)
}
