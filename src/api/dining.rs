use serde::Deserialize;

use crate::client::ApiClient;
use crate::models::MenuItem;
use crate::Result;

#[derive(Deserialize)]
struct MenuEnvelope {
    menu: Vec<MenuItem>,
}

/// `GET /dining/menu`, optionally filtered to one category
#[tracing::instrument(skip(client))]
pub async fn menu(client: &ApiClient, category: Option<&str>) -> Result<Vec<MenuItem>> {
    let envelope: MenuEnvelope = match category {
        Some(category) => {
            client
                .get_with_query(
                    "/dining/menu",
                    vec![("category".to_string(), category.to_string())],
                )
                .await?
        }
        None => client.get("/dining/menu").await?,
    };
    Ok(envelope.menu)
}
