use anyhow::Result;
use chatgate::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (action, globals) = start()?;

    // Handle the action
    match action {
        Action::Login { email, password } => {
            actions::login::handle(email, &password, &globals).await?;
        }
        Action::Signup {
            full_name,
            email,
            password,
        } => actions::signup::handle(full_name, email, &password, &globals).await?,
    }

    Ok(())
}
