use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

use chrono::{DateTime, Duration, Utc};
use portfolio::domain::CachedResponse;
use portfolio::storage::{ResponseCache, SqliteResponseCache, SqliteStorage};

pub const LOGIN: &str = "Berohlfs";
pub const MEDIUM_USER: &str = "berohlfs";
pub const CHANNEL_ID: &str = "UCtestchannel";

pub const USER_JSON: &str = r#"{
    "login": "Berohlfs",
    "avatar_url": "https://avatars.githubusercontent.com/u/74180000?v=4",
    "html_url": "https://github.com/Berohlfs",
    "public_repos": 21,
    "followers": 14,
    "following": 11
}"#;

pub const REPOS_JSON: &str = r#"[
    {
        "name": "portfolio",
        "html_url": "https://github.com/Berohlfs/portfolio",
        "description": "Personal website",
        "language": "TypeScript",
        "stargazers_count": 3,
        "forks_count": 0,
        "fork": false
    },
    {
        "name": "tuscan",
        "html_url": "https://github.com/Berohlfs/tuscan",
        "description": "Bachelor's capstone project",
        "language": "Python",
        "stargazers_count": 1,
        "forks_count": 1,
        "fork": false
    }
]"#;

pub const CHANNEL_JSON: &str = r#"{
    "items": [{
        "id": "UCtestchannel",
        "snippet": {
            "title": "Brazilian Bunker",
            "thumbnails": {"default": {"url": "https://yt3.ggpht.com/bunker.jpg"}}
        },
        "statistics": {"subscriberCount": "1534", "viewCount": "204311", "videoCount": "48"}
    }]
}"#;

pub const FEED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss xmlns:content="http://purl.org/rss/1.0/modules/content/" version="2.0">
  <channel>
    <title>Stories by Bernardo on Medium</title>
    <link>https://medium.com/@berohlfs</link>
    <description>Stories by Bernardo on Medium</description>
    <item>
      <title>Documenting systems that change</title>
      <link>https://medium.com/@berohlfs/documenting-systems</link>
      <pubDate>Tue, 14 May 2024 18:20:11 GMT</pubDate>
      <content:encoded><![CDATA[<h3>Why docs rot</h3><p>Keeping documentation close to the code.</p>]]></content:encoded>
    </item>
  </channel>
</rss>"#;

/// Store all four upstream responses as if fetched `age` ago
pub fn seed_cache(db_path: &Path, age: Duration) -> DateTime<Utc> {
    let cache = SqliteResponseCache::new(SqliteStorage::new(db_path).unwrap());
    let fetched_at = Utc::now() - age;

    let entries = [
        (format!("github:user:{}", LOGIN), USER_JSON),
        (format!("github:repos:{}", LOGIN), REPOS_JSON),
        (format!("youtube:channel:{}", CHANNEL_ID), CHANNEL_JSON),
        (format!("medium:feed:{}", MEDIUM_USER), FEED_XML),
    ];

    for (key, body) in entries {
        cache
            .put(&CachedResponse::new(key, body.to_string(), fetched_at))
            .unwrap();
    }

    fetched_at
}

pub fn cached_entry(db_path: &Path, cache_key: &str) -> Option<CachedResponse> {
    let cache = SqliteResponseCache::new(SqliteStorage::new(db_path).unwrap());
    cache.get(cache_key).unwrap()
}

/// Base URL of a local port that is known to have no listener
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Base URL of a local server answering every request with `status`
pub fn status_server_url(status: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };

            // Consume the request head before answering
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let body = "{\"message\": \"Not Found\"}";
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    url
}
