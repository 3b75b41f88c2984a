use post_now_client::prelude::*;
use post_now_client::utils::get_env_non_empty;

/// Logs in, lists the first page of posts and logs out
///
/// Reads `POST_NOW_USERNAME` and `POST_NOW_PASSWORD`; the API location comes
/// from `POST_NOW_API_URL` as for every client.
///
/// Run with: cargo run --bin simple_client_example
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = ApiClient::from_env();
    info!("Using API at {}", client.base_url());

    if !client.is_authenticated() {
        let username = get_env_non_empty("POST_NOW_USERNAME").unwrap_or_else(|| "demo".into());
        let password = get_env_non_empty("POST_NOW_PASSWORD").unwrap_or_default();
        let login = client.login(username, password).await?;
        info!("Logged in as {}", login.username);
    }

    let validation = client.auth.validate_token().await?;
    info!("Token valid: {}", validation.valid);

    let page = client.posts.get_all_posts(&PageRequest::new(0, 10)).await?;
    info!("{} posts in total", page.total_elements);
    for post in &page.content {
        let author = post
            .author
            .as_ref()
            .map(UserSummaryDto::display_name)
            .unwrap_or_default();
        info!("#{} {} by {}", post.id, post.title, author);
    }

    let unread = client.notifications.get_unread_count().await?;
    info!("{} unread notifications", unread);

    client.logout()?;
    info!("✓ Done");
    Ok(())
}
