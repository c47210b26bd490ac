//! Default upstream sources, in fallback order.

use std::sync::Arc;

use super::{
    DrawSource, HtmlTableParser, HttpFetcher, JsonApiParser, RecordParser, SourceAdapter,
    SourceRequest, SyntheticSource,
};
use crate::models::GameType;

const CWL_NOTICE_URL: &str =
    "http://www.cwl.gov.cn/cwl_admin/front/cwlkj/search/kjxx/findDrawNotice";
const CWL_REFERER: &str = "http://www.cwl.gov.cn/";
/// Issues requested from the draw-notice API.
const CWL_ISSUE_COUNT: &str = "300";

fn cwl_source(game: GameType, fetcher: Arc<dyn HttpFetcher>) -> Arc<dyn DrawSource> {
    let request = SourceRequest::get(CWL_NOTICE_URL)
        .query("name", game.upstream_code())
        .query("issueCount", CWL_ISSUE_COUNT)
        .query("issueStart", "")
        .query("issueEnd", "")
        .query("dayStart", "")
        .query("dayEnd", "")
        .header("Referer", CWL_REFERER);

    Arc::new(SourceAdapter::new(
        "cwl-api",
        game,
        request,
        fetcher,
        RecordParser::JsonApi(JsonApiParser::cwl()),
    ))
}

/// One adapter per page so a dead URL only costs its own slot.
fn html_sources(
    prefix: &str,
    game: GameType,
    urls: &[String],
    fetcher: &Arc<dyn HttpFetcher>,
) -> Vec<Arc<dyn DrawSource>> {
    urls.iter()
        .enumerate()
        .map(|(i, url)| {
            let name = if urls.len() == 1 {
                prefix.to_string()
            } else {
                format!("{}-{}", prefix, i + 1)
            };
            Arc::new(SourceAdapter::new(
                name,
                game,
                SourceRequest::get(url.as_str()),
                Arc::clone(fetcher),
                RecordParser::HtmlTable(HtmlTableParser::default()),
            )) as Arc<dyn DrawSource>
        })
        .collect()
}

fn five_hundred_urls(code: &str) -> Vec<String> {
    vec![
        format!("https://datachart.500.com/{}/history/newinc/history.php", code),
        format!("https://datachart.500.com/{}/history/history.shtml", code),
        format!("https://www.500.com/{}/history/", code),
    ]
}

fn sina_urls(code: &str) -> Vec<String> {
    vec![
        format!(
            "https://match.lottery.sina.com.cn/lotto/pc_zst/index?lottoType={}&actionType=chzs",
            code
        ),
        format!("https://sports.sina.com.cn/lottery/{}/history.shtml", code),
    ]
}

fn netease_urls(code: &str) -> Vec<String> {
    vec![format!("https://caipiao.163.com/award/{}/", code)]
}

/// Builds the fallback chain for `game`.
///
/// The three-digit game prefers the official API; the six-plus-one game
/// prefers the 500.com history tables, which carry more issues.
pub fn default_sources(
    game: GameType,
    fetcher: Arc<dyn HttpFetcher>,
    synthetic_fallback: bool,
) -> Vec<Arc<dyn DrawSource>> {
    let code = game.upstream_code();
    let mut chain: Vec<Arc<dyn DrawSource>> = Vec::new();

    match game {
        GameType::ThreeDigit => {
            chain.push(cwl_source(game, Arc::clone(&fetcher)));
            chain.extend(html_sources("500", game, &five_hundred_urls(code), &fetcher));
        }
        GameType::SixPlusOne => {
            chain.extend(html_sources("500", game, &five_hundred_urls(code), &fetcher));
            chain.push(cwl_source(game, Arc::clone(&fetcher)));
        }
    }
    chain.extend(html_sources("sina", game, &sina_urls(code), &fetcher));
    chain.extend(html_sources("163", game, &netease_urls(code), &fetcher));

    if synthetic_fallback {
        chain.push(Arc::new(SyntheticSource::new(game)));
    }

    chain
}
