//! CLI definitions and command dispatch

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use shared::{ContactRequest, PaymentRequest};

use copmi_client::app::{
    display_media_gallery, handle_contact_submit, handle_mpesa_payment, log_stored_user,
    ContactForm, HtmlGallery, Notifier, StderrNotifier,
};
use copmi_client::services::api::MediaUpload;
use copmi_client::utils::validation::{validate_amount, validate_contact, validate_phone, ValidationResult};
use copmi_client::{ApiClient, ApiService, ClientConfig, FileStore, SessionStore};

/// copmi - Command-line client for the COPMI backend API
#[derive(Parser, Debug)]
#[command(name = "copmi", version, about = "Command-line client for the COPMI backend API")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API base URL (overrides COPMI_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session file (overrides COPMI_SESSION_FILE)
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an account and log in
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(short, long)]
        full_name: String,
    },

    /// Log in with username and password
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Send a message through the contact form
    Contact {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long, default_value = "")]
        phone: String,
        #[arg(short, long, default_value = "")]
        subject: String,
        #[arg(short, long)]
        message: String,
    },

    /// Start an M-Pesa payment (STK push to the payer's phone)
    Pay {
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        amount: String,
        /// e.g. tithe, offering, donation
        #[arg(long, default_value = "")]
        payment_type: String,
        #[arg(long, default_value = "")]
        payer_name: String,
    },

    /// Upload a media file (requires login)
    Upload {
        /// File to upload
        path: PathBuf,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List published media
    Media {
        #[arg(short, long)]
        category: Option<String>,
        /// Print the raw JSON list
        #[arg(long)]
        json: bool,
    },

    /// Render the published media gallery as HTML
    Gallery {
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Run the CLI
pub async fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = &cli.api_url {
        config = config.with_api_url(api_url);
    }
    if let Some(session_file) = cli.session_file.clone() {
        config = config.with_session_file(session_file);
    }
    config.validate()?;

    let _log_guard = copmi_client::debug::logger::init(&config, cli.verbose);

    let store = Arc::new(FileStore::new(config.session_file()?));
    let client = ApiClient::from_config(&config, store.clone())?;
    let notifier = StderrNotifier;

    log_stored_user(store.as_ref());

    let ok = match cli.command {
        Command::Register {
            username,
            email,
            password,
            full_name,
        } => report(&notifier, client.register(username, email, password, full_name).await.map(|o| o.message)),
        Command::Login { username, password } => {
            report(&notifier, client.login(username, password).await.map(|o| o.message))
        }
        Command::Logout => {
            client.logout();
            println!("Logged out");
            true
        }
        Command::Whoami => match store.get() {
            Some(session) => {
                println!("{}", serde_json::to_string_pretty(&session.user)?);
                true
            }
            None => {
                println!("Not logged in");
                false
            }
        },
        Command::Contact {
            name,
            email,
            phone,
            subject,
            message,
        } => {
            let mut form = ContactForm {
                fields: ContactRequest {
                    name,
                    email,
                    phone,
                    subject,
                    message,
                },
            };
            check(&notifier, validate_contact(&form.fields))
                && handle_contact_submit(&client, &mut form, &notifier).await
        }
        Command::Pay {
            phone,
            amount,
            payment_type,
            payer_name,
        } => {
            let payment = PaymentRequest {
                phone: phone.trim().to_string(),
                amount: amount.trim().to_string(),
                payment_type,
                payer_name,
            };
            // Format checks only apply to filled-in fields; the handler reports missing ones
            let formats_ok = (payment.phone.is_empty() || check(&notifier, validate_phone(&payment.phone)))
                && (payment.amount.is_empty() || check(&notifier, validate_amount(&payment.amount)));
            if formats_ok {
                match handle_mpesa_payment(&client, store.as_ref(), payment, &notifier).await {
                    Some(outcome) => {
                        println!("payment_id={}", outcome.payment_id);
                        println!("checkout_request_id={}", outcome.checkout_request_id);
                        true
                    }
                    None => false,
                }
            } else {
                false
            }
        }
        Command::Upload {
            path,
            category,
            description,
        } => {
            let file = MediaUpload::from_path(&path).await?;
            match client.upload_media(file, category.as_deref(), description.as_deref()).await {
                Ok(outcome) => {
                    notifier.alert(&outcome.message);
                    println!("media_id={}", outcome.media_id);
                    true
                }
                Err(e) => report::<String>(&notifier, Err(e)),
            }
        }
        Command::Media { category, json } => match client.get_published_media(category.as_deref()).await {
            Ok(media) if json => {
                println!("{}", serde_json::to_string_pretty(&media)?);
                true
            }
            Ok(media) => {
                for item in &media {
                    println!(
                        "{}\t{}\t{}\t{}",
                        item.id,
                        item.category.as_deref().unwrap_or("-"),
                        item.original_file_name,
                        item.description.as_deref().unwrap_or("")
                    );
                }
                true
            }
            Err(e) => report::<String>(&notifier, Err(e)),
        },
        Command::Gallery { category } => {
            let mut gallery = HtmlGallery::default();
            match display_media_gallery(&client, &mut gallery, category.as_deref()).await {
                Some(_) => {
                    println!("{}", gallery.to_html());
                    true
                }
                None => false,
            }
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Alert the success message or the error; returns whether it succeeded.
fn report<T: AsRef<str>>(notifier: &dyn Notifier, result: copmi_client::Result<T>) -> bool {
    match result {
        Ok(message) => {
            notifier.alert(message.as_ref());
            true
        }
        Err(e) => {
            notifier.alert(&format!("Error: {}", e));
            false
        }
    }
}

fn check(notifier: &dyn Notifier, validation: ValidationResult) -> bool {
    match validation.error {
        Some(error) => {
            notifier.alert(&error);
            false
        }
        None => true,
    }
}
