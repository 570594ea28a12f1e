use crate::{
    core::{
        BingClient, BingError,
        client::{NEWS_SEARCH_PATH, NEWS_TRENDING_PATH},
        net,
    },
    news::{
        model::{NewsCategory, NewsSearch, NewsTrendingTopics},
        params::{NewsCategoryParams, NewsSearchParams},
    },
};

pub(super) async fn fetch_category(
    client: &BingClient,
    params: &NewsCategoryParams,
) -> Result<NewsCategory, BingError> {
    let mut url = client.base_news().clone();
    params.query_pairs().apply(&mut url);

    let key = params.category.as_deref().unwrap_or("headlines");
    net::fetch_json(client, url, "news_category", key).await
}

pub(super) async fn fetch_search(
    client: &BingClient,
    params: &NewsSearchParams,
) -> Result<NewsSearch, BingError> {
    let mut url = client.base_news().join(NEWS_SEARCH_PATH)?;
    params.query_pairs().apply(&mut url);

    net::fetch_json(client, url, "news_search", &params.q).await
}

pub(super) async fn fetch_trending_topics(
    client: &BingClient,
) -> Result<NewsTrendingTopics, BingError> {
    let url = client.base_news().join(NEWS_TRENDING_PATH)?;

    net::fetch_json(client, url, "news_trendingtopics", "all").await
}
