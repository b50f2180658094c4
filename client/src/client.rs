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

//! Event-driven Telnet client

use crate::{ClientConfig, ClientError, Result, TelnetHandler};
use bytes::BytesMut;
use std::sync::Arc;
use telnex_engine::{Control, SessionState, TelnetEngine, TelnetEvent};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, RwLock};
use tokio::time::timeout;
use tracing::{debug, info};

const READ_BUFFER_SIZE: usize = 8192;

#[derive(Debug)]
enum Command {
    Login { username: String, password: String },
    SendData(String),
    SendControl(Control),
    SendSync,
    SetWindowSize(u16, u16),
    Logout,
    Close,
}

/// Cloneable handle onto an active connection.
///
/// Operations are fire-and-forget: they enqueue onto the connection
/// task and return immediately. Once the connection is gone they fail
/// with [`ClientError::NotConnected`].
#[derive(Clone)]
pub struct TelnetConnection {
    inner: Arc<ConnectionInner>,
}

struct ConnectionInner {
    tx: mpsc::UnboundedSender<Command>,
    state: RwLock<SessionState>,
}

impl TelnetConnection {
    fn new(tx: mpsc::UnboundedSender<Command>) -> Self {
        Self {
            inner: Arc::new(ConnectionInner {
                tx,
                state: RwLock::new(SessionState::Disconnected),
            }),
        }
    }

    /// Current lifecycle state of the session.
    pub async fn state(&self) -> SessionState {
        *self.inner.state.read().await
    }

    /// True while the transport is open.
    pub async fn is_connected(&self) -> bool {
        self.state().await.is_connected()
    }

    /// Stores credentials for the login assistant. May be called before
    /// or after an `on_login_required` callback.
    pub fn login(&self, username: &str, password: &str) -> Result<()> {
        self.send(Command::Login {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Sends application data verbatim. No CR/LF is appended.
    pub fn send_data(&self, data: &str) -> Result<()> {
        self.send(Command::SendData(data.to_string()))
    }

    /// Sends a control message, with a SYNC where the kind requests one.
    pub fn send_control(&self, control: Control) -> Result<()> {
        self.send(Command::SendControl(control))
    }

    /// Sends the SYNC sequence, asking the server to discard output
    /// buffered up to this point.
    pub fn send_sync(&self) -> Result<()> {
        self.send(Command::SendSync)
    }

    /// Reports a new window size, driving the NAWS announcement.
    pub fn set_window_size(&self, cols: u16, rows: u16) -> Result<()> {
        self.send(Command::SetWindowSize(cols, rows))
    }

    /// Requests a logout from the server. The session closes when the
    /// server acknowledges.
    pub fn logout(&self) -> Result<()> {
        self.send(Command::Logout)
    }

    /// Tears the session down without waiting for the server.
    pub fn close(&self) -> Result<()> {
        self.send(Command::Close)
    }

    fn send(&self, command: Command) -> Result<()> {
        self.inner
            .tx
            .send(command)
            .map_err(|_| ClientError::NotConnected)
    }

    async fn set_state(&self, state: SessionState) {
        *self.inner.state.write().await = state;
    }
}

/// Asynchronous Telnet client.
///
/// Transport readiness and application calls are serialized onto one
/// task: the connection loop alternates between reading the socket into
/// the protocol engine and applying queued [`TelnetConnection`]
/// commands, flushing the engine's outbound bytes after every
/// interaction. Handler callbacks therefore observe events in
/// byte-stream order, and negotiation replies hit the wire before the
/// next inbound frame is parsed.
pub struct TelnetClient {
    config: ClientConfig,
    connection: Option<TelnetConnection>,
}

impl TelnetClient {
    /// Creates a client with the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            connection: None,
        }
    }

    /// The handle of the most recent connection, if any.
    pub fn connection(&self) -> Option<&TelnetConnection> {
        self.connection.as_ref()
    }

    /// Connects to the configured host and drives the session until it
    /// ends. Returns immediately when a connection is already active.
    ///
    /// Failures of the connect attempt itself are returned; once the
    /// session is up, transport errors additionally reach the handler
    /// through `on_connection_error`.
    pub async fn connect<H: TelnetHandler>(&mut self, handler: Arc<H>) -> Result<()> {
        if let Some(connection) = &self.connection {
            if connection.state().await.is_connected() {
                return Ok(());
            }
        }

        let address = self.config.address();
        info!("connecting to {address}");
        let stream = match timeout(self.config.connect_timeout, TcpStream::connect(&address)).await
        {
            Ok(Ok(stream)) => stream,
            Ok(Err(error)) => return Err(error.into()),
            Err(_) => return Err(ClientError::ConnectionTimeout),
        };

        self.run(stream, handler).await
    }

    /// Drives a session over a caller-supplied transport, for sockets
    /// the application opened itself. A previous session, if still
    /// around, is logged out and discarded first.
    pub async fn connect_with<S, H>(&mut self, stream: S, handler: Arc<H>) -> Result<()>
    where
        S: AsyncRead + AsyncWrite + Unpin + Send,
        H: TelnetHandler,
    {
        if let Some(connection) = self.connection.take() {
            if connection.state().await.is_connected() {
                let _ = connection.logout();
                let _ = connection.close();
            }
        }
        self.run(stream, handler).await
    }

    async fn run<S, H>(&mut self, mut stream: S, handler: Arc<H>) -> Result<()>
    where
        S: AsyncRead + AsyncWrite + Unpin + Send,
        H: TelnetHandler,
    {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let connection = TelnetConnection::new(tx);
        self.connection = Some(connection.clone());

        let mut engine = TelnetEngine::new();
        engine.set_login_pattern(self.config.login_pattern.clone());
        engine.set_password_pattern(self.config.password_pattern.clone());
        engine.set_prompt_pattern(self.config.prompt_pattern.clone());
        if let Some((cols, rows)) = self.config.window_size {
            engine.set_window_size(cols, rows);
        }
        engine.connecting();
        engine.connected();
        connection.set_state(engine.state()).await;

        handler.on_connected(&connection).await;
        if let Err(error) = flush_engine(&mut engine, &mut stream).await {
            let error = ClientError::from(error);
            handler.on_connection_error(&connection, &error).await;
            connection.set_state(SessionState::LoggedOut).await;
            return Err(error);
        }

        let mut read_buffer = BytesMut::with_capacity(READ_BUFFER_SIZE);
        let result = loop {
            tokio::select! {
                read = stream.read_buf(&mut read_buffer) => match read {
                    Ok(0) => {
                        debug!("server closed the connection");
                        break Ok(());
                    }
                    Ok(_) => {
                        let chunk = read_buffer.split();
                        let events = engine.receive(&chunk);
                        let flushed = flush_engine(&mut engine, &mut stream).await;
                        dispatch_events(&handler, &connection, events).await;
                        if let Err(error) = flushed {
                            break Err(ClientError::from(error));
                        }
                    }
                    Err(error) => break Err(ClientError::from(error)),
                },
                command = rx.recv() => {
                    apply_command(&mut engine, command.unwrap_or(Command::Close));
                    let flushed = flush_engine(&mut engine, &mut stream).await;
                    dispatch_events(&handler, &connection, engine.take_events()).await;
                    if let Err(error) = flushed {
                        break Err(ClientError::from(error));
                    }
                }
            }

            connection.set_state(engine.state()).await;
            if !engine.state().is_connected() {
                break Ok(());
            }
        };

        // The session is over, however it ended.
        if engine.state().is_connected() {
            engine.connection_lost();
        }
        dispatch_events(&handler, &connection, engine.take_events()).await;
        connection.set_state(engine.state()).await;
        if let Err(error) = &result {
            handler.on_connection_error(&connection, error).await;
        }
        result
    }
}

fn apply_command(engine: &mut TelnetEngine, command: Command) {
    match command {
        Command::Login { username, password } => engine.login(&username, &password),
        Command::SendData(data) => engine.send_data(&data),
        Command::SendControl(control) => engine.send_control(control),
        Command::SendSync => engine.send_sync(),
        Command::SetWindowSize(cols, rows) => engine.set_window_size(cols, rows),
        Command::Logout => engine.logout(),
        Command::Close => engine.close(),
    }
}

/// Moves queued engine output to the transport. The SYNC byte is meant
/// to travel as TCP urgent data; tokio exposes no urgent-data surface,
/// so it degrades to an in-band Data Mark behind a flush.
async fn flush_engine<S>(engine: &mut TelnetEngine, stream: &mut S) -> std::io::Result<()>
where
    S: AsyncWrite + Unpin + Send,
{
    let output = engine.take_output();
    if !output.is_empty() {
        stream.write_all(&output).await?;
    }
    if let Some(byte) = engine.take_urgent() {
        stream.flush().await?;
        stream.write_all(&[byte]).await?;
    }
    stream.flush().await?;
    Ok(())
}

async fn dispatch_events<H: TelnetHandler>(
    handler: &Arc<H>,
    connection: &TelnetConnection,
    events: Vec<TelnetEvent>,
) {
    for event in events {
        match event {
            TelnetEvent::Message(text) => handler.on_message(connection, &text).await,
            TelnetEvent::LoginRequired => handler.on_login_required(connection).await,
            TelnetEvent::LoginFailed => handler.on_login_failed(connection).await,
            TelnetEvent::LoggedIn => handler.on_logged_in(connection).await,
            TelnetEvent::LoggedOut => handler.on_logged_out(connection).await,
        }
    }
}
