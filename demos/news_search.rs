use std::time::Duration;

use bingo_rs::{
    Bing, BingClient, NewsCategoryParams, NewsSearchParams, SafeSearch, VideoSearchParams,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    bingo_rs::init_tracing_for_tests();

    let api_key = std::env::var("BING_API_KEY")?;
    let query = std::env::args().nth(1).unwrap_or_else(|| "rust".to_string());

    // 1. A client with a 10-second timeout, shared by every API group.
    let client = BingClient::builder(api_key)
        .timeout(Duration::from_secs(10))
        .build()?;
    let bing = Bing::from_client(&client);

    // 2. Keyword search.
    let params = NewsSearchParams::new(query.as_str())
        .count(5)
        .mkt("en-US")
        .safe_search(SafeSearch::Moderate);
    let news = bing.search.news.search(&params).await?;
    println!(
        "--- News for {query:?} (~{} matches) ---",
        news.total_estimated_matches
    );
    for hit in &news.value {
        let published = hit
            .item
            .date_published
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("  [{published}] {}", hit.item.name);
    }
    println!();

    // 3. Headlines for one category.
    let tech = bing
        .search
        .news
        .category(&NewsCategoryParams::new().category("ScienceAndTechnology"))
        .await?;
    println!("--- Science & Technology ---");
    for item in tech.value.iter().take(5) {
        println!("  {}", item.name);
    }
    println!();

    // 4. Trending topics.
    let trending = bing.search.news.trending_topics().await?;
    println!("--- Trending ---");
    for topic in trending.value.iter().take(5) {
        let flag = if topic.is_breaking_news { " (breaking)" } else { "" };
        println!("  {}{flag}", topic.name);
    }
    println!();

    // 5. Videos.
    let videos = bing
        .search
        .video
        .search(&VideoSearchParams::new(query.as_str()).count(3))
        .await?;
    println!("--- Videos ---");
    for v in &videos.value {
        println!("  {} [{}] {}", v.name, v.duration, v.content_url);
    }

    Ok(())
}
