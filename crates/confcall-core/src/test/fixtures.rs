use crate::{
    ids::{SectionKind, TypeRef},
    model::{
        ArgValue, EnumType, ExtensionRegistry, ParamType, Signature, TypeDescriptor,
        TypeRegistry, default_factory,
    },
};

pub const TEXT_FORMATTER: &str = "ITextFormatter";
pub const FORMAT_PROVIDER: &str = "IFormatProvider";
pub const LOG_EVENT_SINK: &str = "ILogEventSink";

#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Debug, Default)]
pub struct CompactJsonFormatter;

#[derive(Debug, Default)]
pub struct RawFormatter;

#[derive(Debug, Default)]
pub struct ConsoleSink;

///
/// type_registry
/// A "Serilog" module with three formatters and one sink, plus an empty
/// "core" module.
///

#[must_use]
pub fn type_registry() -> TypeRegistry {
    let mut types = TypeRegistry::new();

    types
        .register_module("core")
        .register_type(
            TypeDescriptor::new(
                "Serilog",
                "Serilog.Formatting.Json.JsonFormatter",
                default_factory::<JsonFormatter>,
            )
            .implements(TEXT_FORMATTER),
        )
        .register_type(
            TypeDescriptor::new(
                "Serilog",
                "Serilog.Formatting.Compact.CompactJsonFormatter",
                default_factory::<CompactJsonFormatter>,
            )
            .implements(TEXT_FORMATTER),
        )
        .register_type(
            TypeDescriptor::new(
                "Serilog",
                "Serilog.Formatting.Raw.RawFormatter",
                default_factory::<RawFormatter>,
            )
            .implements(TEXT_FORMATTER),
        )
        .register_type(
            TypeDescriptor::new(
                "Serilog",
                "Serilog.Sinks.ConsoleSink",
                default_factory::<ConsoleSink>,
            )
            .implements(LOG_EVENT_SINK),
        )
        .register_capability(
            TEXT_FORMATTER,
            TypeRef::parse("Serilog.Formatting.Raw.RawFormatter, Serilog"),
        )
        .register_capability(FORMAT_PROVIDER, None);

    types
}

#[must_use]
pub fn level_type() -> ParamType {
    ParamType::enumeration(EnumType::new(
        "LogEventLevel",
        &["Verbose", "Debug", "Information", "Warning", "Error", "Fatal"],
    ))
}

fn minimum_level() -> ArgValue {
    ArgValue::Enum {
        type_name: "LogEventLevel".to_string(),
        variant: "Verbose".to_string(),
    }
}

/// Two overloads differing in their leading parameter: a raw path, or a
/// pluggable formatter followed by the path.
#[must_use]
pub fn dummy_rolling_file_overloads() -> Vec<Signature> {
    vec![
        Signature::new("DummyRollingFile")
            .required("pathFormat", ParamType::String)
            .optional("restrictedToMinimumLevel", level_type(), minimum_level())
            .optional("outputTemplate", ParamType::String, ArgValue::Null)
            .optional(
                "formatProvider",
                ParamType::capability(FORMAT_PROVIDER),
                ArgValue::Null,
            ),
        Signature::new("DummyRollingFile")
            .required("formatter", ParamType::capability(TEXT_FORMATTER))
            .required("pathFormat", ParamType::String)
            .optional("restrictedToMinimumLevel", level_type(), minimum_level()),
    ]
}

#[must_use]
pub fn extension_registry() -> ExtensionRegistry {
    let mut reg = ExtensionRegistry::new();

    for sig in dummy_rolling_file_overloads() {
        reg.register(SectionKind::WriteTo, sig.clone());
        reg.register(SectionKind::AuditTo, sig);
    }

    reg.register(
        SectionKind::WriteTo,
        Signature::new("LiterateConsole")
            .optional("restrictedToMinimumLevel", level_type(), minimum_level())
            .optional("outputTemplate", ParamType::String, ArgValue::Null),
    )
    .register(
        SectionKind::WriteTo,
        Signature::new("EnvironmentVariableTest").required("tempValue", ParamType::String),
    )
    .register(SectionKind::Enrich, Signature::new("FromLogContext"))
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
