use portfolio_form::{Field, FormController, HttpContactApi};
use portfolio_shared::contact::FormStatus;

/// Fills the contact form with the given values and submits it once.
pub async fn submit(
    url: String,
    name: String,
    email: String,
    message: String,
) -> anyhow::Result<()> {
    let controller = FormController::new(HttpContactApi::new(&url)?);
    controller.edit(Field::Name, name);
    controller.edit(Field::Email, email);
    controller.edit(Field::Message, message);

    tracing::info!(url = %url, "Submitting contact form");

    match controller.submit().await {
        FormStatus::Succeeded => {
            println!("{}", portfolio_form::SUCCESS_MESSAGE);
            Ok(())
        }
        FormStatus::Failed(error) => {
            anyhow::bail!(
                "{}",
                error.unwrap_or_else(|| portfolio_form::NETWORK_ERROR.to_owned())
            )
        }
        status => anyhow::bail!("unexpected form status: {status}"),
    }
}
