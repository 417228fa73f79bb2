use crate::config::cli::Command;
use crate::core::paging::collect_pages;
use crate::core::{ApiRequest, Executor, Paginated, Range};
use crate::requests::{
    CreateBidPrice, CreateConversation, GetAlphaById, GetAlphaErrors, GetAlphaInsights,
    GetAlphaList, GetAlphaPrices, GetAuthorById, SearchAlphas, SearchAuthors, Subscribe,
    Unsubscribe,
};
use crate::utils::error::{AlphaStreamError, Result};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::Value;

fn range_from<T>(minimum: Option<T>, maximum: Option<T>) -> Option<Range<T>> {
    if minimum.is_none() && maximum.is_none() {
        None
    } else {
        Some(Range::create(minimum, maximum))
    }
}

fn invalid(field: &str, reason: String) -> AlphaStreamError {
    AlphaStreamError::InvalidRequestError {
        field: field.to_string(),
        reason,
    }
}

/// `--active-within-days` 換算成最後登入時間的下限
fn days_ago(days: i64) -> Result<DateTime<Utc>> {
    if days < 0 {
        return Err(invalid(
            "active_within_days",
            format!("{} days is negative", days),
        ));
    }
    Duration::try_days(days)
        .and_then(|span| Utc::now().checked_sub_signed(span))
        .ok_or_else(|| invalid("active_within_days", format!("{} days is out of range", days)))
}

/// `--valid-for-hours` 換算成出價的到期時間
fn hours_from_now(hours: i64) -> Result<DateTime<Utc>> {
    if hours < 1 {
        return Err(invalid(
            "valid_for_hours",
            format!("A bid must stay valid for at least one hour, got {}", hours),
        ));
    }
    Duration::try_hours(hours)
        .and_then(|span| Utc::now().checked_add_signed(span))
        .ok_or_else(|| invalid("valid_for_hours", format!("{} hours is out of range", hours)))
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

async fn fetch_list<E, R, T>(executor: &E, request: R, all: bool) -> Result<Value>
where
    E: Executor + ?Sized,
    R: Paginated + ApiRequest<Response = Vec<T>> + 'static,
    T: serde::de::DeserializeOwned + Serialize + Send + 'static,
{
    let items = if all {
        collect_pages(executor, request).await?
    } else {
        executor.execute(&request).await?
    };
    tracing::info!("📦 Fetched {} items", items.len());
    to_json(&items)
}

/// 執行一個子命令並回傳可直接輸出的 JSON
pub async fn run_command<E>(executor: &E, command: Command) -> Result<Value>
where
    E: Executor + ?Sized,
{
    match command {
        Command::Alpha { id } => to_json(&executor.execute(&GetAlphaById::new(id)).await?),
        Command::Insights { id, start, all } => {
            let request = GetAlphaInsights { id, start };
            fetch_list(executor, request, all).await
        }
        Command::Prices { id, start, all } => {
            let request = GetAlphaPrices { id, start };
            fetch_list(executor, request, all).await
        }
        Command::Errors { id, start, all } => {
            let request = GetAlphaErrors { id, start };
            fetch_list(executor, request, all).await
        }
        Command::List => to_json(&executor.execute(&GetAlphaList).await?),
        Command::Author { id } => to_json(&executor.execute(&GetAuthorById::new(id)).await?),
        Command::SearchAlphas {
            author,
            asset_classes,
            symbols,
            include_tags,
            exclude_tags,
            min_accuracy,
            max_accuracy,
            min_sharpe,
            max_sharpe,
            min_uniqueness,
            max_uniqueness,
            max_shared_fee,
            max_exclusive_fee,
            all,
        } => {
            let request = SearchAlphas {
                author,
                asset_classes,
                symbols,
                include_tags,
                exclude_tags,
                accuracy: range_from(min_accuracy, max_accuracy),
                sharpe: range_from(min_sharpe, max_sharpe),
                uniqueness: range_from(min_uniqueness, max_uniqueness),
                shared_fee: range_from(None, max_shared_fee),
                exclusive_fee: range_from(None, max_exclusive_fee),
                start: 0,
            };
            fetch_list(executor, request, all).await
        }
        Command::SearchAuthors {
            biography,
            languages,
            location,
            min_alphas_listed,
            min_projects,
            min_forum_comments,
            active_within_days,
            all,
        } => {
            let request = SearchAuthors {
                biography,
                languages,
                location,
                alphas_listed: range_from(min_alphas_listed, None),
                projects: range_from(min_projects, None),
                forum_comments: range_from(min_forum_comments, None),
                last_login: active_within_days
                    .map(days_ago)
                    .transpose()?
                    .map(Range::at_least),
                ..Default::default()
            };
            fetch_list(executor, request, all).await
        }
        Command::Subscribe { id, exclusive } => {
            let response = executor.execute(&Subscribe { id, exclusive }).await?;
            to_json(&response.into_result()?)
        }
        Command::Unsubscribe { id } => {
            let response = executor.execute(&Unsubscribe::new(id)).await?;
            to_json(&response.into_result()?)
        }
        Command::Converse {
            id,
            from,
            subject,
            message,
            cc,
        } => {
            let request = CreateConversation {
                id,
                from,
                subject,
                message,
                cc,
            };
            to_json(&executor.execute(&request).await?.into_result()?)
        }
        Command::Bid {
            id,
            shared,
            exclusive,
            valid_for_hours,
        } => {
            let request = CreateBidPrice {
                id,
                shared_price: shared,
                exclusive_price: exclusive,
                good_until: hours_from_now(valid_for_hours)?,
            };
            to_json(&executor.execute(&request).await?.into_result()?)
        }
    }
}
