//! IGDB game catalog client
//!
//! Issues Apicalypse queries against `/v4/games`. Browsers cannot call
//! IGDB directly, so a CORS proxy prefix can be configured for the web
//! build.

use async_trait::async_trait;
use legends_domain::{Game, GameId};
use serde::Deserialize;

use crate::ports::outbound::{GameSearchError, GameSearchPort};

pub const IGDB_GAMES_URL: &str = "https://api.igdb.com/v4/games";

/// Cover used for every remote result; the art itself goes in `image`.
pub const REMOTE_COVER: &str = "bg-gradient-to-br from-gray-800 to-black";

const PLACEHOLDER_CLIENT_ID: &str = "YOUR_CLIENT_ID_HERE";
const PLACEHOLDER_ACCESS_TOKEN: &str = "YOUR_ACCESS_TOKEN_HERE";

/// Credentials and routing for IGDB.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IgdbConfig {
    pub client_id: String,
    pub access_token: String,
    /// Prefix prepended to the API URL (e.g. a CORS proxy)
    pub proxy_url: Option<String>,
}

impl IgdbConfig {
    /// Whether both credentials are present and not placeholders.
    pub fn is_configured(&self) -> bool {
        let client_id = self.client_id.trim();
        let token = self.access_token.trim();
        !client_id.is_empty()
            && !token.is_empty()
            && client_id != PLACEHOLDER_CLIENT_ID
            && token != PLACEHOLDER_ACCESS_TOKEN
    }

    pub fn endpoint(&self) -> String {
        match &self.proxy_url {
            Some(proxy) => format!("{proxy}{IGDB_GAMES_URL}"),
            None => IGDB_GAMES_URL.to_string(),
        }
    }
}

/// Apicalypse body: main games, expansions, remakes and remasters.
pub fn query_body(query: &str) -> String {
    let escaped = query.replace('\\', "\\\\").replace('"', "\\\"");
    format!(
        "search \"{escaped}\"; fields name, cover.url, screenshots.url; limit 20; where category = (0,4,8,9);"
    )
}

/// IGDB returns protocol-relative thumbnails; upgrade to a large cover.
pub fn image_url(raw: &str) -> String {
    format!("https:{}", raw.replace("t_thumb", "t_cover_big"))
}

#[derive(Debug, Deserialize)]
struct IgdbImage {
    url: String,
}

#[derive(Debug, Deserialize)]
struct IgdbGame {
    id: u64,
    name: String,
    cover: Option<IgdbImage>,
    #[serde(default)]
    screenshots: Vec<IgdbImage>,
}

impl IgdbGame {
    fn into_game(self) -> Game {
        let art = self
            .cover
            .as_ref()
            .or_else(|| self.screenshots.first())
            .map(|image| image_url(&image.url));

        let game = Game::new(GameId::external(self.id), self.name, REMOTE_COVER)
            .with_external_id(self.id);
        match art {
            Some(art) => game.with_image(art),
            None => game,
        }
    }
}

fn decode(body: &str) -> Result<Vec<Game>, GameSearchError> {
    let items: Vec<IgdbGame> =
        serde_json::from_str(body).map_err(|e| GameSearchError::Decode(e.to_string()))?;
    Ok(items.into_iter().map(IgdbGame::into_game).collect())
}

#[derive(Clone)]
pub struct IgdbGameSearch {
    config: IgdbConfig,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl IgdbGameSearch {
    pub fn new(config: IgdbConfig) -> Self {
        Self {
            config,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn post(&self, body: String) -> Result<String, GameSearchError> {
        let response = self
            .client
            .post(self.config.endpoint())
            .header("Client-ID", &self.config.client_id)
            .bearer_auth(&self.config.access_token)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await
            .map_err(|e| GameSearchError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GameSearchError::Status(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| GameSearchError::Request(e.to_string()))
    }

    #[cfg(target_arch = "wasm32")]
    async fn post(&self, body: String) -> Result<String, GameSearchError> {
        use gloo_net::http::Request;

        let request = Request::post(&self.config.endpoint())
            .header("Client-ID", &self.config.client_id)
            .header(
                "Authorization",
                &format!("Bearer {}", self.config.access_token),
            )
            .header("Content-Type", "text/plain")
            .body(body)
            .map_err(|e| GameSearchError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| GameSearchError::Request(e.to_string()))?;

        if !response.ok() {
            return Err(GameSearchError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| GameSearchError::Request(e.to_string()))
    }
}

#[async_trait]
impl GameSearchPort for IgdbGameSearch {
    async fn search(&self, query: &str) -> Result<Vec<Game>, GameSearchError> {
        if !self.config.is_configured() {
            return Err(GameSearchError::NotConfigured);
        }
        let body = query_body(query);

        #[cfg(not(target_arch = "wasm32"))]
        let text = self.post(body).await?;

        // gloo-net futures are !Send; the browser is single threaded.
        #[cfg(target_arch = "wasm32")]
        let text = send_wrapper::SendWrapper::new(self.post(body)).await?;

        decode(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> IgdbConfig {
        IgdbConfig {
            client_id: "client".into(),
            access_token: "token".into(),
            proxy_url: None,
        }
    }

    mod config {
        use super::*;

        #[test]
        fn placeholders_are_not_configured() {
            let config = IgdbConfig {
                client_id: PLACEHOLDER_CLIENT_ID.into(),
                access_token: PLACEHOLDER_ACCESS_TOKEN.into(),
                proxy_url: None,
            };

            assert!(!config.is_configured());
            assert!(!IgdbConfig::default().is_configured());
            assert!(configured().is_configured());
        }

        #[test]
        fn proxy_prefixes_endpoint() {
            let config = IgdbConfig {
                proxy_url: Some("https://proxy.example/".into()),
                ..configured()
            };

            assert_eq!(
                config.endpoint(),
                "https://proxy.example/https://api.igdb.com/v4/games"
            );
            assert_eq!(configured().endpoint(), IGDB_GAMES_URL);
        }

        #[tokio::test]
        async fn unconfigured_client_refuses_to_search() {
            let search = IgdbGameSearch::new(IgdbConfig::default());

            let err = search.search("elden").await.unwrap_err();

            assert!(matches!(err, GameSearchError::NotConfigured));
        }
    }

    mod request {
        use super::*;

        #[test]
        fn body_searches_main_categories() {
            let body = query_body("Elden Ring");

            assert!(body.starts_with("search \"Elden Ring\";"));
            assert!(body.contains("fields name, cover.url, screenshots.url;"));
            assert!(body.contains("limit 20;"));
            assert!(body.contains("where category = (0,4,8,9);"));
        }

        #[test]
        fn quotes_in_query_are_escaped() {
            assert!(query_body("say \"hi\"").starts_with("search \"say \\\"hi\\\"\";"));
        }
    }

    mod response {
        use super::*;

        #[test]
        fn maps_cover_to_large_https_image() {
            let games = decode(
                r#"[{"id": 1942, "name": "The Witcher 3", "cover": {"url": "//images.igdb.com/igdb/image/upload/t_thumb/co1wyy.jpg"}}]"#,
            )
            .unwrap();

            assert_eq!(games[0].id.as_str(), "igdb-1942");
            assert_eq!(games[0].external_id, Some(1942));
            assert_eq!(games[0].cover, REMOTE_COVER);
            assert_eq!(
                games[0].image.as_deref(),
                Some("https://images.igdb.com/igdb/image/upload/t_cover_big/co1wyy.jpg")
            );
        }

        #[test]
        fn falls_back_to_first_screenshot() {
            let games = decode(
                r#"[{"id": 7, "name": "Obscure", "screenshots": [{"url": "//x/t_thumb/a.jpg"}, {"url": "//x/t_thumb/b.jpg"}]}]"#,
            )
            .unwrap();

            assert_eq!(games[0].image.as_deref(), Some("https://x/t_cover_big/a.jpg"));
        }

        #[test]
        fn games_without_art_have_no_image() {
            let games = decode(r#"[{"id": 8, "name": "Bare"}]"#).unwrap();

            assert_eq!(games[0].image, None);
        }

        #[test]
        fn malformed_payload_is_a_decode_error() {
            let err = decode(r#"{"message": "unauthorized"}"#).unwrap_err();

            assert!(matches!(err, GameSearchError::Decode(_)));
        }
    }
}
