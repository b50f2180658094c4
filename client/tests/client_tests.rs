//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Loopback tests: the client against a scripted server over an
//! in-memory duplex stream.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use telnex_client::{ClientConfig, TelnetClient, TelnetConnection, TelnetHandler};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::mpsc;

const INITIAL_OPTIONS: [u8; 12] = [
    0xFF, 0xFB, 0x25, // WILL Authentication
    0xFF, 0xFD, 0x03, // DO SuppressGoAhead
    0xFF, 0xFB, 0x22, // WILL Linemode
    0xFF, 0xFD, 0x05, // DO Status
];

/// Forwards every handler callback into a channel the test can await.
struct Recorder {
    tx: mpsc::UnboundedSender<String>,
    logout_on_connect: bool,
}

impl Recorder {
    fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Recorder {
            tx,
            logout_on_connect: false,
        }
    }

    fn record(&self, event: impl Into<String>) {
        let _ = self.tx.send(event.into());
    }
}

#[async_trait]
impl TelnetHandler for Recorder {
    async fn on_connected(&self, conn: &TelnetConnection) {
        self.record("connected");
        if self.logout_on_connect {
            conn.logout().expect("logout enqueues");
        }
    }

    async fn on_message(&self, _conn: &TelnetConnection, text: &str) {
        self.record(format!("message:{text}"));
    }

    async fn on_login_required(&self, _conn: &TelnetConnection) {
        self.record("login_required");
    }

    async fn on_login_failed(&self, _conn: &TelnetConnection) {
        self.record("login_failed");
    }

    async fn on_logged_in(&self, _conn: &TelnetConnection) {
        self.record("logged_in");
    }

    async fn on_logged_out(&self, _conn: &TelnetConnection) {
        self.record("logged_out");
    }
}

/// Reads events until `wanted` shows up; unrelated events in between
/// are skipped.
async fn expect_event(rx: &mut mpsc::UnboundedReceiver<String>, wanted: &str) {
    loop {
        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap_or_else(|_| panic!("timed out waiting for {wanted}"))
            .unwrap_or_else(|| panic!("events closed before {wanted}"));
        if event == wanted {
            return;
        }
    }
}

#[tokio::test]
async fn announces_initial_options_on_connect() {
    let (client_io, mut server_io) = tokio::io::duplex(1024);
    let (tx, _rx) = mpsc::unbounded_channel();

    let task = tokio::spawn(async move {
        let mut client = TelnetClient::new(ClientConfig::new("loopback", 23));
        client.connect_with(client_io, Arc::new(Recorder::new(tx))).await
    });

    let mut initial = [0u8; 12];
    server_io.read_exact(&mut initial).await.unwrap();
    assert_eq!(initial, INITIAL_OPTIONS);

    drop(server_io);
    task.await.unwrap().unwrap();
}

#[tokio::test]
async fn null_auth_round_trip_reports_logged_in() {
    let (client_io, mut server_io) = tokio::io::duplex(1024);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let task = tokio::spawn(async move {
        let config = ClientConfig::new("loopback", 23)
            .with_login_pattern(None)
            .with_password_pattern(None);
        let mut client = TelnetClient::new(config);
        client.connect_with(client_io, Arc::new(Recorder::new(tx))).await
    });

    let mut initial = [0u8; 12];
    server_io.read_exact(&mut initial).await.unwrap();

    // SB Authentication SEND NULL CLIENT|ONE-WAY SE
    server_io
        .write_all(&[0xFF, 0xFA, 0x25, 0x01, 0x00, 0x00, 0xFF, 0xF0])
        .await
        .unwrap();
    let mut reply = [0u8; 8];
    server_io.read_exact(&mut reply).await.unwrap();
    assert_eq!(reply, [0xFF, 0xFA, 0x25, 0x00, 0x00, 0x00, 0xFF, 0xF0]);
    expect_event(&mut rx, "logged_in").await;

    server_io.write_all(b"Welcome!\r\n").await.unwrap();
    expect_event(&mut rx, "message:Welcome!\r\n").await;

    drop(server_io);
    expect_event(&mut rx, "logged_out").await;
    task.await.unwrap().unwrap();
}

#[tokio::test]
async fn logout_acknowledgment_ends_the_session() {
    let (client_io, mut server_io) = tokio::io::duplex(1024);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let task = tokio::spawn(async move {
        let mut client = TelnetClient::new(ClientConfig::new("loopback", 23));
        let mut handler = Recorder::new(tx);
        handler.logout_on_connect = true;
        client.connect_with(client_io, Arc::new(handler)).await
    });

    let mut initial = [0u8; 12];
    server_io.read_exact(&mut initial).await.unwrap();

    let mut logout = [0u8; 3];
    server_io.read_exact(&mut logout).await.unwrap();
    assert_eq!(logout, [0xFF, 0xFD, 0x12]); // DO Logout

    server_io.write_all(&[0xFF, 0xFC, 0x12]).await.unwrap(); // WONT Logout
    expect_event(&mut rx, "logged_out").await;
    task.await.unwrap().unwrap();
}

#[tokio::test]
async fn window_size_negotiation_announces_dimensions() {
    let (client_io, mut server_io) = tokio::io::duplex(1024);
    let (tx, _rx) = mpsc::unbounded_channel();

    let task = tokio::spawn(async move {
        let config = ClientConfig::new("loopback", 23).with_window_size(80, 24);
        let mut client = TelnetClient::new(config);
        client.connect_with(client_io, Arc::new(Recorder::new(tx))).await
    });

    let mut initial = [0u8; 15];
    server_io.read_exact(&mut initial).await.unwrap();
    assert_eq!(&initial[..12], &INITIAL_OPTIONS[..]);
    assert_eq!(&initial[12..], &[0xFF, 0xFB, 0x1F]); // WILL NAWS

    server_io.write_all(&[0xFF, 0xFD, 0x1F]).await.unwrap(); // DO NAWS
    let mut naws = [0u8; 9];
    server_io.read_exact(&mut naws).await.unwrap();
    assert_eq!(
        naws,
        [0xFF, 0xFA, 0x1F, 0x00, 0x50, 0x00, 0x18, 0xFF, 0xF0]
    );

    drop(server_io);
    task.await.unwrap().unwrap();
}
