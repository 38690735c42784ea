// src/notify.rs
// Change notifications. Delivery is pluggable: the log, an SMTP relay (STARTTLS),
// or an outbox directory of `.eml` files that a local MTA / mail client picks up.
use std::fs;
use std::path::PathBuf;

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{FileTransport, SmtpTransport, Transport};

use crate::config::options::NotifyOptions;
use crate::error::NotifyError;
use crate::model::Snapshot;
use crate::snapshot::Changes;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub wallet: String,
    pub subject: String,
    pub body: String,
}

pub trait Notifier {
    fn send(&mut self, msg: &Message) -> Result<(), NotifyError>;
}

/// Writes the message to the log only.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&mut self, msg: &Message) -> Result<(), NotifyError> {
        log::info!("Notification: {}\n{}", msg.subject, msg.body);
        Ok(())
    }
}

/// Plain-text email for `msg`. Control characters in the subject become spaces;
/// header encoding (RFC 2047 for non-ASCII) is left to lettre.
pub fn build_email(from: &str, to: &str, msg: &Message) -> Result<lettre::Message, NotifyError> {
    let from: Mailbox = from.parse()?;
    let to: Mailbox = to.parse()?;
    let subject: String = msg.subject.chars().map(|c| if c.is_control() { ' ' } else { c }).collect();

    let email = lettre::Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(msg.body.clone())?;
    Ok(email)
}

/// One `.eml` file per message in `dir`.
pub struct SpoolNotifier {
    dir: PathBuf,
    transport: FileTransport,
    from: String,
    to: String,
}

impl SpoolNotifier {
    pub fn new(dir: impl Into<PathBuf>, from: &str, to: &str) -> Self {
        let dir = dir.into();
        Self { transport: FileTransport::new(&dir), dir, from: s!(from), to: s!(to) }
    }

    /// `None` unless a spool dir and both addresses are configured.
    pub fn from_options(opts: &NotifyOptions) -> Option<Self> {
        match (&opts.spool_dir, &opts.from, &opts.to) {
            (Some(dir), Some(from), Some(to)) => Some(Self::new(dir.clone(), from, to)),
            _ => None,
        }
    }
}

impl Notifier for SpoolNotifier {
    fn send(&mut self, msg: &Message) -> Result<(), NotifyError> {
        fs::create_dir_all(&self.dir)?;
        let email = build_email(&self.from, &self.to, msg)?;
        let id = self.transport.send(&email)?;
        let path = self.dir.join(format!("{id}.eml"));
        log::info!("Email to {} queued at {} with subject: {}", self.to, path.display(), msg.subject);
        Ok(())
    }
}

/// Sends through an SMTP relay after STARTTLS, logging in as the sender.
pub struct SmtpNotifier {
    transport: SmtpTransport,
    from: String,
    to: String,
}

impl SmtpNotifier {
    /// `Ok(None)` unless both addresses and the password are configured.
    /// No connection is made until the first `send`.
    pub fn from_options(opts: &NotifyOptions) -> Result<Option<Self>, NotifyError> {
        let (Some(from), Some(to), Some(password)) = (&opts.from, &opts.to, &opts.password) else {
            return Ok(None);
        };
        let transport = SmtpTransport::starttls_relay(&opts.smtp_server)?
            .port(opts.smtp_port)
            .credentials(Credentials::new(from.clone(), password.clone()))
            .build();
        log::debug!("SMTP relay {}:{} as {}", opts.smtp_server, opts.smtp_port, from);
        Ok(Some(Self { transport, from: from.clone(), to: to.clone() }))
    }
}

impl Notifier for SmtpNotifier {
    fn send(&mut self, msg: &Message) -> Result<(), NotifyError> {
        let email = build_email(&self.from, &self.to, msg)?;
        self.transport.send(&email)?;
        log::info!("Email sent to {} with subject: {}", self.to, msg.subject);
        Ok(())
    }
}

/// Subject/body for a recorded snapshot. `changes` is `None` for a wallet's first snapshot.
pub fn change_message(wallet: &str, url: &str, snapshot: &Snapshot, changes: Option<&Changes>) -> Message {
    let subject = match changes {
        None => format!("[stalker] {wallet}: tracking started"),
        Some(_) => format!("[stalker] {wallet}: holdings changed"),
    };

    let mut body = format!("Wallet: {wallet}\nSource: {url}\nCaptured: {}\n\n", snapshot.timestamp());
    if let Some(c) = changes {
        body.push_str("Changes:\n");
        body.push_str(&c.to_string());
        body.push('\n');
    }
    body.push_str(&format!("Holdings ({}):\n", snapshot.len()));
    for a in snapshot.assets() {
        body.push_str(&format!(
            "  {}: {} units @ {} = {} ({}%, profit {})\n",
            a.name.trim(), a.units, a.current_price, a.value, a.change, a.profit
        ));
    }
    body.push_str(&format!("Total value: {:.2}\n", snapshot.total_value()));

    Message { wallet: s!(wallet), subject, body }
}
