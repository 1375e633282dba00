use std::io;

use telerivet::{Params, Resource, TelerivetClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = TelerivetClient::from_env()?;

    let project_id = std::env::var("TELERIVET_PROJECT_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELERIVET_PROJECT_ID environment variable is required",
        )
    })?;
    let project = client.init_project_by_id(&project_id);

    let to_number = std::env::var("TELERIVET_TO_NUMBER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELERIVET_TO_NUMBER environment variable is required",
        )
    })?;

    let mut params = Params::new();
    params.insert("to_number".into(), to_number.into());
    params.insert("content".into(), "Hello from the Telerivet Rust client".into());

    let message = project.send_message(&params)?;
    println!(
        "id: {}, status: {:?}, to: {:?}",
        message.id()?,
        message.status()?,
        message.to_number()?
    );

    let mut recent = project.query_messages(Params::new())?.limit(5);
    println!("messages in project: {}", recent.total_count()?);
    for message in recent.by_ref() {
        let message = message?;
        println!("{} {:?}", message.id()?, message.content()?);
    }

    Ok(())
}
