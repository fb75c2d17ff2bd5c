use timestring::cli::{internal_error, run, user_error};
use timestring::TimestringError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        // Parse failures are the user's; anything else is ours
        if e.downcast_ref::<TimestringError>().is_some() {
            user_error(&e.to_string());
        }

        let mut message = e.to_string();
        let mut source = e.source();
        if source.is_some() {
            message.push_str("\n\nCaused by:");
            let mut indent = 1;
            while let Some(err) = source {
                message.push_str(&format!("\n{:indent$}  {}", "", err));
                source = err.source();
                indent += 1;
            }
        }
        internal_error(&message);
    }
}
