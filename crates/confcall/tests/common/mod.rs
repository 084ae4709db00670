// Host fixture: a small sink catalogue shaped like a real logging host.

#![allow(dead_code)]

use confcall::prelude::*;
use std::{any::Any, sync::Arc};

pub const TEXT_FORMATTER: &str = "ITextFormatter";
pub const FORMAT_PROVIDER: &str = "IFormatProvider";
pub const CONSOLE_THEME: &str = "ConsoleTheme";

pub const SETTINGS: &str = r#"
[types]
default_module = "Serilog"
"#;

pub const DEFAULT_TEMPLATE: &str = "[{Timestamp:HH:mm:ss} {Level:u3}] {Message:lj}{NewLine}{Exception}";

#[derive(Debug, Default)]
pub struct MessageTemplateTextFormatter;

#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Debug, Default)]
pub struct CompactJsonFormatter;

#[derive(Debug, Default)]
pub struct AnsiConsoleTheme;

fn broken_formatter() -> Result<Arc<dyn Any + Send + Sync>, String> {
    Err("requires an output writer".to_string())
}

#[must_use]
pub fn types() -> TypeRegistry {
    let mut types = TypeRegistry::new();

    types
        .register_type(
            TypeDescriptor::new(
                "Serilog",
                "Serilog.Formatting.Display.MessageTemplateTextFormatter",
                default_factory::<MessageTemplateTextFormatter>,
            )
            .implements(TEXT_FORMATTER),
        )
        .register_type(
            TypeDescriptor::new(
                "Serilog",
                "Serilog.Formatting.Json.JsonFormatter",
                default_factory::<JsonFormatter>,
            )
            .implements(TEXT_FORMATTER),
        )
        .register_type(
            TypeDescriptor::new("Serilog", "Serilog.Formatting.BrokenFormatter", broken_formatter)
                .implements(TEXT_FORMATTER),
        )
        .register_type(
            TypeDescriptor::new(
                "Serilog",
                "Serilog.Sinks.SystemConsole.Themes.AnsiConsoleTheme",
                default_factory::<AnsiConsoleTheme>,
            )
            .implements(CONSOLE_THEME),
        )
        .register_type(
            TypeDescriptor::new(
                "Serilog.Formatting.Compact",
                "Serilog.Formatting.Compact.CompactJsonFormatter",
                default_factory::<CompactJsonFormatter>,
            )
            .implements(TEXT_FORMATTER),
        )
        .register_capability(
            TEXT_FORMATTER,
            TypeRef::parse("Serilog.Formatting.Display.MessageTemplateTextFormatter, Serilog"),
        )
        .register_capability(
            CONSOLE_THEME,
            TypeRef::parse("Serilog.Sinks.SystemConsole.Themes.AnsiConsoleTheme"),
        )
        .register_capability(FORMAT_PROVIDER, None);

    types
}

#[must_use]
pub fn level() -> ParamType {
    ParamType::enumeration(EnumType::new(
        "LogEventLevel",
        &["Verbose", "Debug", "Information", "Warning", "Error", "Fatal"],
    ))
}

#[must_use]
pub fn rolling_interval() -> ParamType {
    ParamType::enumeration(EnumType::new(
        "RollingInterval",
        &["Infinite", "Year", "Month", "Day", "Hour", "Minute"],
    ))
}

fn variant(type_name: &str, variant: &str) -> ArgValue {
    ArgValue::Enum {
        type_name: type_name.to_string(),
        variant: variant.to_string(),
    }
}

fn file_overloads() -> [Signature; 2] {
    [
        Signature::new("File")
            .required("path", ParamType::String)
            .optional("restrictedToMinimumLevel", level(), variant("LogEventLevel", "Verbose"))
            .optional("rollingInterval", rolling_interval(), variant("RollingInterval", "Infinite"))
            .optional("buffered", ParamType::Bool, ArgValue::Bool(false))
            .optional(
                "fileSizeLimitBytes",
                ParamType::nullable(ParamType::I64),
                ArgValue::Int(1_073_741_824),
            )
            .optional(
                "flushToDiskInterval",
                ParamType::nullable(ParamType::Duration),
                ArgValue::Null,
            ),
        Signature::new("File")
            .required("formatter", ParamType::capability(TEXT_FORMATTER))
            .required("path", ParamType::String)
            .optional("restrictedToMinimumLevel", level(), variant("LogEventLevel", "Verbose")),
    ]
}

#[must_use]
pub fn extensions() -> ExtensionRegistry {
    let mut reg = ExtensionRegistry::new();

    reg.register(
        SectionKind::WriteTo,
        Signature::new("Console")
            .optional("restrictedToMinimumLevel", level(), variant("LogEventLevel", "Verbose"))
            .optional("outputTemplate", ParamType::String, ArgValue::from(DEFAULT_TEMPLATE))
            .optional("formatProvider", ParamType::capability(FORMAT_PROVIDER), ArgValue::Null)
            .optional("theme", ParamType::capability(CONSOLE_THEME), ArgValue::Null),
    );

    for sig in file_overloads() {
        reg.register(SectionKind::WriteTo, sig.clone())
            .register(SectionKind::AuditTo, sig);
    }

    reg.register(SectionKind::Enrich, Signature::new("FromLogContext"))
        .register(
            SectionKind::Enrich,
            Signature::new("WithProperty")
                .required("name", ParamType::String)
                .required("value", ParamType::String),
        )
        .register(
            SectionKind::Filter,
            Signature::new("ByExcluding").required("expression", ParamType::String),
        );

    reg
}

#[must_use]
pub fn confcall() -> Confcall {
    Confcall::from_toml(extensions(), types(), SETTINGS).unwrap()
}

/// Root section `Serilog` of a tree built from colon paths.
#[must_use]
pub fn serilog(pairs: &[(&str, Option<&str>)]) -> ConfigSection {
    ConfigSection::from_pairs(pairs.iter().copied())
        .section("Serilog")
        .cloned()
        .unwrap_or_default()
}
