use crate::args::Args;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::{error, info};

/// Best-effort notification mail. Skipped silently when SMTP is not
/// configured; failures are logged, never surfaced to the request.
pub async fn send_email(args: &Args, to: &str, subject: &str, body: &str) {
    if to.is_empty()
        || args.smtp_server.is_empty()
        || args.smtp_login.is_empty()
        || args.smtp_password.is_empty()
        || args.smtp_from.is_empty()
    {
        info!("SMTP not configured, skipping email to {}", to);
        return;
    }

    let from = match args.smtp_from.parse() {
        Ok(addr) => addr,
        Err(err) => {
            error!("Bad from address {}: {}", args.smtp_from, err);
            return;
        }
    };
    let to_addr = match to.parse() {
        Ok(addr) => addr,
        Err(err) => {
            error!("Bad recipient address {}: {}", to, err);
            return;
        }
    };

    let email = match Message::builder()
        .from(from)
        .to(to_addr)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(String::from(body))
    {
        Ok(msg) => msg,
        Err(err) => {
            error!("Could not build email: {}", err);
            return;
        }
    };

    let creds = Credentials::new(args.smtp_login.clone(), args.smtp_password.clone());
    let mailer = match SmtpTransport::relay(&args.smtp_server) {
        Ok(relay) => relay.credentials(creds).build(),
        Err(err) => {
            error!("Bad SMTP relay {}: {}", args.smtp_server, err);
            return;
        }
    };

    match mailer.send(&email) {
        Ok(_) => info!("Email sent to {}", to),
        Err(err) => error!("Could not send email: {:?}", err),
    }
}
