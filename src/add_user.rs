use anyhow::Result;
use auth_api::configuration::get_configuration;
use auth_api::models::{NewUser, NewUserData};
use auth_api::startup::get_connection_pool;
use secrecy::Secret;
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    let configuration = get_configuration().expect("Failed to read configuration.");
    let connection_pool = get_connection_pool(&configuration.database);

    print!("Enter username: ");
    io::stdout().flush().unwrap();

    let mut username = String::new();
    io::stdin()
        .read_line(&mut username)
        .expect("Failed to read line");
    username = username.trim().to_string();

    print!("Enter email: ");
    io::stdout().flush().unwrap();

    let mut email = String::new();
    io::stdin()
        .read_line(&mut email)
        .expect("Failed to read line");
    email = email.trim().to_string();

    let mut password =
        rpassword::prompt_password("Enter password: ").expect("Failed to read line.");
    password = password.trim().to_string();

    let mut password_check =
        rpassword::prompt_password("Enter password again: ").expect("Failed to read line.");
    password_check = password_check.trim().to_string();

    if password_check == password {
        let new_user = NewUserData {
            email,
            username,
            password: Secret::new(password_check),
        };
        let user = NewUser::try_from(new_user)
            .expect("Failed to initialize user.")
            .store(&connection_pool)
            .await
            .expect("Failed to store user.");

        println!("Successfully stored user: {}", user.username);
    }

    Ok(())
}
