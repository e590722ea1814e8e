//! Login, session-scoped actors, theme preference and logout.

use super::helpers::{Studio, studio};
use atelier::identity::{domain::Theme, services::AuthenticationError};
use atelier::lifecycle::{ErrorKind, LifecycleError};
use eyre::ensure;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn hashed_and_legacy_credentials_both_open_sessions(
    studio: eyre::Result<Studio>,
) -> eyre::Result<()> {
    let studio = studio?;

    let manager = studio.auth.login("lucia@studio.pe", "abc123").await?;
    let internal = studio.auth.login("ana@studio.pe", "abc123").await?;
    ensure!(manager.user().id == studio.manager.id());
    ensure!(internal.user().id == studio.internal.id());
    ensure!(manager.id() != internal.id());
    ensure!(studio.auth.session(manager.id()).await?.user().name == "Lucía");
    Ok(())
}

#[rstest]
#[case("lucia@studio.pe", "wrong")]
#[case("nobody@studio.pe", "abc123")]
#[case("not-an-address", "abc123")]
#[tokio::test(flavor = "multi_thread")]
async fn failed_logins_look_identical(
    studio: eyre::Result<Studio>,
    #[case] email: &str,
    #[case] secret: &str,
) -> eyre::Result<()> {
    let studio = studio?;
    let result = studio.auth.login(email, secret).await;
    ensure!(matches!(result, Err(AuthenticationError::InvalidCredentials)));
    ensure!(matches!(result, Err(ref err) if err.kind() == ErrorKind::Authentication));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn session_actor_drives_gated_actions(studio: eyre::Result<Studio>) -> eyre::Result<()> {
    let studio = studio?;
    let freelancer = studio.auth.login("leo@studio.pe", "pixel-pusher").await?;
    let manager = studio.auth.login("lucia@studio.pe", "abc123").await?;

    let details = atelier::project::domain::ProjectDetails::new("Nightfall", studio.manager.id())?;
    let denied = studio
        .coordinator
        .create_project(&freelancer.actor(), details.clone())
        .await;
    ensure!(matches!(denied, Err(LifecycleError::Denied(_))));

    let project = studio
        .coordinator
        .create_project(&manager.actor(), details)
        .await?;
    ensure!(project.is_active());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn theme_is_per_session_and_logout_ends_it(
    studio: eyre::Result<Studio>,
) -> eyre::Result<()> {
    let studio = studio?;
    let internal = studio.auth.login("ana@studio.pe", "abc123").await?;
    let freelancer = studio.auth.login("leo@studio.pe", "pixel-pusher").await?;

    let dark = studio.auth.set_theme(internal.id(), Theme::Dark).await?;
    ensure!(dark.theme() == Theme::Dark);
    ensure!(studio.auth.session(freelancer.id()).await?.theme() == Theme::default());

    let denied = studio.auth.set_theme(freelancer.id(), Theme::Dark).await;
    ensure!(matches!(denied, Err(AuthenticationError::Denied(_))));

    studio.auth.logout(internal.id()).await?;
    studio.auth.logout(internal.id()).await?;
    let gone = studio.auth.session(internal.id()).await;
    ensure!(matches!(gone, Err(AuthenticationError::SessionNotFound(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn access_recovery_only_mails_known_addresses(
    studio: eyre::Result<Studio>,
) -> eyre::Result<()> {
    let studio = studio?;
    let known = studio.auth.recover_access("leo@studio.pe").await?;
    let unknown = studio.auth.recover_access("ghost@studio.pe").await?;
    ensure!(known == unknown);

    let delivered = studio.shutdown().await;
    ensure!(delivered.len() == 1);
    ensure!(delivered.iter().all(|message| message.recipient.as_str() == "leo@studio.pe"));
    ensure!(delivered.iter().all(|message| !message.plain_text.contains("pixel-pusher")));
    Ok(())
}
