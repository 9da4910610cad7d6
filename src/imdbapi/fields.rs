use serde_json::Value;

/// How a second-level box-office field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxOfficeFormat {
    /// `{amount, currency}` pair rendered as "USD 1,234,567".
    Money,
    /// `{year, month, day}` rendered as zero-padded YYYY-MM-DD.
    WeekendDate,
    /// Unrecognized fields pass through untouched.
    Raw,
}

pub fn box_office_format(segment: Option<&str>) -> BoxOfficeFormat {
    match segment {
        Some("worldwideGross")
        | Some("domesticGross")
        | Some("openingWeekendGross")
        | Some("productionBudget") => BoxOfficeFormat::Money,
        Some("weekendEndDate") => BoxOfficeFormat::WeekendDate,
        _ => BoxOfficeFormat::Raw,
    }
}

/// How a top-level details field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsFormat {
    /// List of `{name}` objects joined with ", ".
    NameList,
    Raw,
}

pub fn details_format(segment: &str) -> DetailsFormat {
    match segment {
        "originCountries" | "spokenLanguages" => DetailsFormat::NameList,
        _ => DetailsFormat::Raw,
    }
}

/// Walk a path through nested objects. A missing key yields null; reaching a
/// non-object stops the walk and keeps the value reached so far.
pub fn navigate(mut value: Value, path: &[&str]) -> Value {
    for segment in path {
        value = match value {
            Value::Object(mut map) => map.remove(*segment).unwrap_or(Value::Null),
            other => other,
        };
    }
    value
}

pub fn format_money(value: &Value) -> Option<String> {
    let obj = value.as_object()?;
    let amount = obj.get("amount")?;
    let amount = amount
        .as_i64()
        .or_else(|| amount.as_f64().map(|f| f as i64))?;
    let currency = obj.get("currency").and_then(Value::as_str).unwrap_or("");
    Some(format!("{} {}", currency, group_thousands(amount)))
}

pub fn format_weekend_date(value: &Value) -> Option<String> {
    let obj = value.as_object()?;
    let year = obj.get("year")?.as_i64()?;
    let month = obj.get("month")?.as_i64()?;
    let day = obj.get("day")?.as_i64()?;
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

pub fn format_name_list(value: &Value) -> Option<String> {
    let items = value.as_array()?;
    let names: Vec<&str> = items
        .iter()
        .map(|item| item.get("name").and_then(Value::as_str).unwrap_or(""))
        .collect();
    Some(names.join(", "))
}

/// Decimal digits grouped with commas every three places.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(50_000), "50,000");
    }

    #[test]
    fn formats_money() {
        let full = json!({ "amount": 1234567, "currency": "USD" });
        assert_eq!(format_money(&full), Some("USD 1,234,567".to_string()));

        let no_amount = json!({ "currency": "USD" });
        assert_eq!(format_money(&no_amount), None);

        // A present amount with a missing currency code keeps the leading space.
        let no_currency = json!({ "amount": 500 });
        assert_eq!(format_money(&no_currency), Some(" 500".to_string()));

        assert_eq!(format_money(&Value::Null), None);
    }

    #[test]
    fn formats_weekend_date() {
        let full = json!({ "year": 2024, "month": 3, "day": 7 });
        assert_eq!(format_weekend_date(&full), Some("2024-03-07".to_string()));

        let missing_day = json!({ "year": 2024, "month": 3 });
        assert_eq!(format_weekend_date(&missing_day), None);
    }

    #[test]
    fn formats_name_lists() {
        let list = json!([{ "name": "United States" }, { "name": "Brazil" }]);
        assert_eq!(
            format_name_list(&list),
            Some("United States, Brazil".to_string())
        );

        assert_eq!(format_name_list(&json!([{}])), Some("".to_string()));
        assert_eq!(format_name_list(&json!({ "name": "x" })), None);
        assert_eq!(format_name_list(&Value::Null), None);
    }

    #[test]
    fn navigation_short_circuits() {
        let blob = json!({ "metacritic": { "score": 88 }, "plot": "text" });

        assert_eq!(
            navigate(blob.clone(), &["metacritic", "score"]),
            json!(88)
        );
        assert_eq!(navigate(blob.clone(), &["missing"]), Value::Null);
        assert_eq!(navigate(blob.clone(), &["missing", "deeper"]), Value::Null);
        // A non-object value stops the walk and is kept as-is.
        assert_eq!(navigate(blob, &["plot", "deeper"]), json!("text"));
    }

    #[test]
    fn dispatch_maps_known_fields_and_passes_through_the_rest() {
        assert_eq!(
            box_office_format(Some("productionBudget")),
            BoxOfficeFormat::Money
        );
        assert_eq!(
            box_office_format(Some("openingWeekendGross")),
            BoxOfficeFormat::Money
        );
        assert_eq!(
            box_office_format(Some("weekendEndDate")),
            BoxOfficeFormat::WeekendDate
        );
        assert_eq!(box_office_format(Some("somethingNew")), BoxOfficeFormat::Raw);
        assert_eq!(box_office_format(None), BoxOfficeFormat::Raw);

        assert_eq!(details_format("originCountries"), DetailsFormat::NameList);
        assert_eq!(details_format("spokenLanguages"), DetailsFormat::NameList);
        assert_eq!(details_format("plot"), DetailsFormat::Raw);
    }
}
