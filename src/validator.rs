//! Validação das opções de requisição
//!
//! Os esquemas ficam em `data/api_params.yaml`, embutido em tempo de compilação
//! e interpretado uma única vez. Cada esquema associa chaves de opção a uma
//! regra; [`validate`] normaliza as chaves (camelCase -> snake_case), aplica
//! defaults, formata datas e verifica enums e campos obrigatórios.
//!
//! Valores iguais ao default em chaves não obrigatórias são removidos: a API
//! aplica o mesmo default do lado do servidor.

use crate::client::Params;
use crate::error::{value_to_string, Result, TogglError};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

const API_PARAMS: &str = include_str!("../data/api_params.yaml");

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

static SCHEMAS: Lazy<std::result::Result<HashMap<String, Schema>, String>> =
    Lazy::new(|| parse_schemas(API_PARAMS));

static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new("[a-z][A-Z]").unwrap());

/// Tipo de uma regra de validação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Any,
    Date,
    Enum,
    Boolean,
    Number,
    String,
}

impl RuleKind {
    fn of(value: &Value) -> Self {
        match value {
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            _ => Self::Any,
        }
    }
}

/// Regra aplicada a uma chave de opção
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub kind: RuleKind,
    pub required: bool,
    pub default: Option<Value>,
    /// Valores permitidos (enum)
    pub values: Vec<Value>,
    /// Formato chrono de saída (date)
    pub format: Option<String>,
    /// Default de date relativo a hoje, em dias
    pub offset_days: Option<i64>,
}

impl Rule {
    fn any() -> Self {
        Self {
            kind: RuleKind::Any,
            required: false,
            default: None,
            values: Vec::new(),
            format: None,
            offset_days: None,
        }
    }
}

/// Forma completa de uma regra no arquivo de esquemas
#[derive(Debug, Deserialize)]
struct RuleSpec {
    #[serde(rename = "type")]
    kind: Option<RuleKind>,
    #[serde(default)]
    required: bool,
    default: Option<Value>,
    #[serde(default)]
    values: Vec<Value>,
    format: Option<String>,
    offset_days: Option<i64>,
}

impl From<RuleSpec> for Rule {
    fn from(spec: RuleSpec) -> Self {
        let kind = spec
            .kind
            .or_else(|| spec.default.as_ref().map(RuleKind::of))
            .unwrap_or(RuleKind::Any);

        Self {
            kind,
            required: spec.required,
            default: spec.default,
            values: spec.values,
            format: spec.format,
            offset_days: spec.offset_days,
        }
    }
}

/// Esquema de validação nomeado
#[derive(Debug, Clone)]
pub struct Schema {
    pub name: String,
    pub rules: Vec<(String, Rule)>,
}

/// Converte camelCase em snake_case (`apiToken` -> `api_token`)
pub fn underscore(key: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(key, |caps: &Captures| {
            let pair = &caps[0];
            let split = pair.char_indices().nth(1).map(|(i, _)| i).unwrap_or(pair.len());
            format!("{}_{}", &pair[..split], &pair[split..])
        })
        .to_lowercase()
}

/// Busca um esquema pelo identificador
pub fn schema(id: &str) -> Result<&'static Schema> {
    let schemas = SCHEMAS
        .as_ref()
        .map_err(|e| TogglError::ConfigError(format!("Invalid validation schemas: {}", e)))?;

    schemas
        .get(id)
        .ok_or_else(|| TogglError::validation(format!("Unknown validation schema: {}", id)))
}

/// Valida e normaliza `options` segundo o esquema `schema_id`
///
/// Altera o mapa no lugar: renomeia chaves, insere/remove defaults e
/// reescreve datas no formato do esquema.
pub fn validate(schema_id: &str, options: &mut Params) -> Result<()> {
    let schema = schema(schema_id)?;

    normalize_keys(options);

    for (key, rule) in &schema.rules {
        apply_rule(key, rule, options)?;
    }

    Ok(())
}

/// Subagrupamentos permitidos para cada agrupamento do relatório resumido
fn summary_subgroupings(grouping: &str) -> &'static [&'static str] {
    match grouping {
        "clients" => &["time_entries", "tasks", "projects", "users"],
        "users" => &["time_entries", "tasks", "projects", "clients"],
        _ => &["time_entries", "tasks", "users"],
    }
}

/// Verifica se `subgrouping` é compatível com `grouping` (relatório resumido)
///
/// Ausentes, valem `projects` e `time_entries`.
pub fn check_summary_grouping(options: &Params) -> Result<()> {
    let grouping = options
        .get("grouping")
        .filter(|v| is_truthy(v))
        .map(value_to_string)
        .unwrap_or_else(|| "projects".to_string());
    let subgrouping = options
        .get("subgrouping")
        .filter(|v| is_truthy(v))
        .map(value_to_string)
        .unwrap_or_else(|| "time_entries".to_string());

    let allowed = summary_subgroupings(&grouping);
    if allowed.contains(&subgrouping.as_str()) {
        return Ok(());
    }

    Err(TogglError::not_allowed(
        format!(
            "Subgrouping value {} does not match any of allowed: {}",
            subgrouping,
            allowed.join(", ")
        ),
        allowed.iter().map(|v| v.to_string()).collect(),
        &Value::String(subgrouping),
    ))
}

fn normalize_keys(options: &mut Params) {
    let camel: Vec<String> = options
        .keys()
        .filter(|key| underscore(key) != **key)
        .cloned()
        .collect();

    for key in camel {
        if let Some(value) = options.remove(&key) {
            options.insert(underscore(&key), value);
        }
    }
}

fn apply_rule(key: &str, rule: &Rule, options: &mut Params) -> Result<()> {
    let value = match rule.kind {
        RuleKind::Date => apply_date(key, rule, options)?,
        RuleKind::Enum => {
            check_enum(rule, present(options.get(key)))?;
            apply_default(key, rule, options)
        }
        RuleKind::Boolean | RuleKind::Number | RuleKind::String => {
            apply_default(key, rule, options)
        }
        RuleKind::Any => present(options.get(key)).cloned(),
    };

    if rule.required && value.is_none() {
        return Err(TogglError::validation(format!("{} is required", key)));
    }

    Ok(())
}

fn apply_default(key: &str, rule: &Rule, options: &mut Params) -> Option<Value> {
    let mut value = present(options.get(key)).cloned();

    if value.is_none() {
        if let Some(default) = rule.default.as_ref().filter(|d| is_truthy(d)) {
            options.insert(key.to_string(), default.clone());
            value = Some(default.clone());
        }
    }

    if !rule.required && value.is_some() && value == rule.default {
        options.remove(key);
    }

    value
}

fn check_enum(rule: &Rule, value: Option<&Value>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };

    let text = value_to_string(value);
    let allowed = rule
        .values
        .iter()
        .any(|candidate| candidate == value || value_to_string(candidate) == text);

    if allowed {
        Ok(())
    } else {
        Err(TogglError::not_allowed(
            "Value does not match any of allowed",
            rule.values.iter().map(value_to_string).collect(),
            value,
        ))
    }
}

fn apply_date(key: &str, rule: &Rule, options: &mut Params) -> Result<Option<Value>> {
    let format = rule.format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT);
    let default = rule
        .offset_days
        .map(|days| (Local::now() + chrono::Duration::days(days)).format(format).to_string());

    let value = match options.get(key).filter(|v| is_truthy(v)) {
        None => default.clone(),
        Some(raw) => Some(
            parse_date(raw, format)
                .map(|date| date.format(format).to_string())
                .ok_or_else(|| TogglError::validation("Unknown date"))?,
        ),
    };

    match &value {
        Some(formatted) => {
            options.insert(key.to_string(), Value::String(formatted.clone()));
        }
        None => {
            options.remove(key);
        }
    }

    if !rule.required && value.is_some() && value == default {
        options.remove(key);
    }

    Ok(value.map(Value::String))
}

/// Interpreta uma data em string (formato do esquema, RFC 3339, ISO) ou
/// timestamp em milissegundos
pub(crate) fn parse_date(raw: &Value, format: &str) -> Option<DateTime<FixedOffset>> {
    match raw {
        Value::Number(n) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
            .map(DateTime::<FixedOffset>::from),
        Value::String(s) => parse_date_str(s.trim(), format),
        _ => None,
    }
}

fn parse_date_str(s: &str, format: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(date) = DateTime::parse_from_str(s, format) {
        return Some(date);
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date);
    }

    for candidate in [format, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, candidate) {
            return local(naive);
        }
    }

    for candidate in [format, "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, candidate) {
            return date.and_hms_opt(0, 0, 0).and_then(local);
        }
    }

    None
}

fn local(naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(DateTime::<FixedOffset>::from)
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn parse_schemas(source: &str) -> std::result::Result<HashMap<String, Schema>, String> {
    let root: serde_yaml::Mapping = serde_yaml::from_str(source).map_err(|e| e.to_string())?;
    let mut schemas = HashMap::new();

    for (name, fields) in root {
        let name = name
            .as_str()
            .ok_or_else(|| "schema name must be a string".to_string())?
            .to_string();
        let fields = fields
            .as_mapping()
            .ok_or_else(|| format!("schema {} must be a mapping", name))?;

        let mut rules = Vec::with_capacity(fields.len());
        for (key, raw) in fields {
            let key = key
                .as_str()
                .ok_or_else(|| format!("schema {} has a non-string key", name))?
                .to_string();

            if let Some(rule) = parse_rule(raw).map_err(|e| format!("{}.{}: {}", name, key, e))? {
                rules.push((key, rule));
            }
        }

        schemas.insert(name.clone(), Schema { name, rules });
    }

    Ok(schemas)
}

fn parse_rule(raw: &serde_yaml::Value) -> std::result::Result<Option<Rule>, String> {
    use serde_yaml::Value as Yaml;

    match raw {
        Yaml::Null => Ok(None),
        Yaml::String(s) if s == "required" => Ok(Some(Rule {
            required: true,
            ..Rule::any()
        })),
        Yaml::Bool(_) | Yaml::Number(_) | Yaml::String(_) => {
            let default = serde_json::to_value(raw).map_err(|e| e.to_string())?;
            Ok(Some(Rule {
                kind: RuleKind::of(&default),
                default: Some(default),
                ..Rule::any()
            }))
        }
        Yaml::Mapping(_) => {
            let spec: RuleSpec = serde_yaml::from_value(raw.clone()).map_err(|e| e.to_string())?;
            Ok(Some(spec.into()))
        }
        other => Err(format!("unsupported rule: {:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn message(error: TogglError) -> String {
        match error {
            TogglError::ValidationError { message, .. } => message,
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_summary_grouping_defaults() {
        assert!(check_summary_grouping(&Params::new()).is_ok());
        assert!(check_summary_grouping(&params(json!({"grouping": "users", "subgrouping": "clients"}))).is_ok());
    }

    #[test]
    fn test_summary_grouping_mismatch() {
        let error = check_summary_grouping(&params(json!({"subgrouping": "projects"}))).unwrap_err();
        match error {
            TogglError::ValidationError { message, allowed, value } => {
                assert_eq!(
                    message,
                    "Subgrouping value projects does not match any of allowed: time_entries, tasks, users"
                );
                assert_eq!(allowed, vec!["time_entries", "tasks", "users"]);
                assert_eq!(value.as_deref(), Some("projects"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_embedded_schemas_parse() {
        let schemas = SCHEMAS.as_ref().expect("schemas parse");
        for id in [
            "client-create",
            "client-get-projects",
            "project-create",
            "project-user-add",
            "tag-create",
            "tag-update",
            "time-entry-create",
            "time-entry-get-timerange",
            "time-entry-update-tags",
            "user-data-get",
            "user-data-set",
            "workspace-projects",
            "workspace-tasks",
            "report-detailed",
            "report-summary",
            "report-weekly",
        ] {
            assert!(schemas.contains_key(id), "missing schema {}", id);
        }
    }

    #[test]
    fn test_shorthand_rules() {
        let project = schema("project-create").unwrap();
        let rule = |key: &str| {
            project
                .rules
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, r)| r.clone())
        };

        assert!(rule("name").unwrap().required);
        assert!(rule("cid").is_none());
        let is_private = rule("is_private").unwrap();
        assert_eq!(is_private.kind, RuleKind::Boolean);
        assert_eq!(is_private.default, Some(json!(true)));
    }

    #[test]
    fn test_underscore() {
        assert_eq!(underscore("apiToken"), "api_token");
        assert_eq!(underscore("withRelatedData"), "with_related_data");
        assert_eq!(underscore("already_snake"), "already_snake");
        assert_eq!(underscore("aBC"), "a_bc");
        assert_eq!(underscore(""), "");
    }

    #[test]
    fn test_unknown_schema() {
        let mut options = Params::new();
        let error = validate("does-not-exist", &mut options).unwrap_err();
        assert_eq!(message(error), "Unknown validation schema: does-not-exist");
    }

    #[test]
    fn test_required_field_missing() {
        let mut options = params(json!({"name": "Acme"}));
        let error = validate("client-create", &mut options).unwrap_err();
        assert_eq!(message(error), "wid is required");
    }

    #[test]
    fn test_camel_case_keys_are_renamed() {
        let mut options = params(json!({"withRelatedData": true}));
        validate("user-data-get", &mut options).unwrap();
        assert_eq!(options.get("with_related_data"), Some(&json!(true)));
        assert!(options.get("withRelatedData").is_none());
    }

    #[test]
    fn test_value_equal_to_default_is_removed() {
        let mut options = params(json!({"name": "Site", "wid": 7, "is_private": true, "auto_estimates": true}));
        validate("project-create", &mut options).unwrap();
        assert!(options.get("is_private").is_none());
        assert_eq!(options.get("auto_estimates"), Some(&json!(true)));
        assert_eq!(options.get("name"), Some(&json!("Site")));
    }

    #[test]
    fn test_enum_accepts_stringified_value() {
        let mut options = params(json!({"active": false}));
        validate("workspace-projects", &mut options).unwrap();
        assert_eq!(options.get("active"), Some(&json!(false)));

        let mut options = params(json!({"active": "true"}));
        validate("workspace-projects", &mut options).unwrap();
        assert!(options.get("active").is_none());
    }

    #[test]
    fn test_enum_rejects_unknown_value() {
        let mut options = params(json!({"tags": ["a"], "tag_action": "toggle"}));
        let error = validate("time-entry-update-tags", &mut options).unwrap_err();
        match error {
            TogglError::ValidationError { message, allowed, value } => {
                assert_eq!(message, "Value does not match any of allowed");
                assert_eq!(allowed, vec!["add", "remove"]);
                assert_eq!(value.as_deref(), Some("toggle"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_date_is_reformatted() {
        let mut options = params(json!({
            "workspace_id": 1,
            "since": "2024-03-01T10:15:00Z",
            "until": "2024-03-05"
        }));
        validate("report-detailed", &mut options).unwrap();
        assert_eq!(options.get("since"), Some(&json!("2024-03-01")));
        assert_eq!(options.get("until"), Some(&json!("2024-03-05")));
    }

    #[test]
    fn test_date_default_is_omitted() {
        let mut options = params(json!({"workspace_id": 1}));
        validate("report-detailed", &mut options).unwrap();
        assert!(options.get("since").is_none());
        assert!(options.get("until").is_none());

        let today = Local::now().format("%Y-%m-%d").to_string();
        let mut options = params(json!({"workspace_id": 1, "until": today}));
        validate("report-detailed", &mut options).unwrap();
        assert!(options.get("until").is_none());
    }

    #[test]
    fn test_invalid_date() {
        let mut options = params(json!({"start_date": "not a date"}));
        let error = validate("time-entry-get-timerange", &mut options).unwrap_err();
        assert_eq!(message(error), "Unknown date");
    }

    #[test]
    fn test_time_entry_start_normalized() {
        let mut options = params(json!({
            "description": "Meeting",
            "start": "2024-03-01T10:00:00Z",
            "stop": null,
            "duration": 1200,
            "created_with": "tests"
        }));
        validate("time-entry-create", &mut options).unwrap();
        assert_eq!(options.get("start"), Some(&json!("2024-03-01T10:00:00+00:00")));
        assert!(options.get("stop").is_none());
    }

    #[test]
    fn test_epoch_millis_date() {
        let date = parse_date(&json!(0), "%Y-%m-%d").unwrap();
        assert_eq!(date.format("%Y-%m-%dT%H:%M:%S%:z").to_string(), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_required_date_missing() {
        let mut options = params(json!({"duration": 10, "created_with": "tests"}));
        let error = validate("time-entry-create", &mut options).unwrap_err();
        assert_eq!(message(error), "start is required");
    }
}
