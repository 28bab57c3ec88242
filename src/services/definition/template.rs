//! Template-symbol definitions

use crate::models::{
    DefinitionAndBoundSpan, DefinitionInfo, ElementKind, TemplateInfo, to_text_span,
};

use super::SymbolLocator;

/// Resolve the symbol at a template position into definition records.
///
/// One symbol may have several definition sites (a selector matching more
/// than one directive); all of them share the single bound span of the match.
pub fn template_definition_and_bound_span<L>(
    locator: &L,
    info: &TemplateInfo,
) -> Option<DefinitionAndBoundSpan>
where
    L: SymbolLocator + ?Sized,
{
    let Some(matched) = locator.locate_symbol(info) else {
        tracing::debug!(
            "No template symbol at {}:{}",
            info.file_name.display(),
            info.position
        );
        return None;
    };

    let text_span = to_text_span(matched.span);
    let symbol = &matched.symbol;
    let locations = symbol.definition_sites();

    if locations.is_empty() {
        tracing::debug!("Symbol '{}' has no definition sites", symbol.name);
        return Some(DefinitionAndBoundSpan::bound_only(text_span));
    }

    let (container_kind, container_name) = match &symbol.container {
        Some(container) => (ElementKind::from(container.kind), container.name.clone()),
        None => (ElementKind::Unknown, String::new()),
    };

    let definitions = locations
        .iter()
        .map(|location| DefinitionInfo {
            kind: ElementKind::from(symbol.kind),
            name: symbol.name.clone(),
            container_kind,
            container_name: container_name.clone(),
            text_span: to_text_span(location.span),
            file_name: location.file_name.clone(),
        })
        .collect();

    Some(DefinitionAndBoundSpan {
        definitions: Some(definitions),
        text_span,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Container, DefinitionLocation, Span, Symbol, SymbolKind, SymbolMatch, TextSpan,
    };
    use std::path::PathBuf;

    fn info() -> TemplateInfo {
        TemplateInfo::new("app.component.html", 12)
    }

    fn locator_for(matched: SymbolMatch) -> impl Fn(&TemplateInfo) -> Option<SymbolMatch> {
        move |_: &TemplateInfo| Some(matched.clone())
    }

    #[test]
    fn test_no_symbol_returns_none() {
        let locator = |_: &TemplateInfo| -> Option<SymbolMatch> { None };
        assert!(template_definition_and_bound_span(&locator, &info()).is_none());
    }

    #[test]
    fn test_empty_definition_keeps_bound_span() {
        let symbol = Symbol::new("title", SymbolKind::Property).with_definition(Vec::new());
        let locator = locator_for(SymbolMatch::new(symbol, Span::new(10, 14)));

        let result = template_definition_and_bound_span(&locator, &info()).unwrap();
        assert_eq!(result.text_span, TextSpan::new(10, 4));
        assert!(result.definitions().is_empty());
    }

    #[test]
    fn test_absent_definition_keeps_bound_span() {
        let symbol = Symbol::new("title", SymbolKind::Property);
        let locator = locator_for(SymbolMatch::new(symbol, Span::new(10, 14)));

        let result = template_definition_and_bound_span(&locator, &info()).unwrap();
        assert_eq!(result.text_span, TextSpan::new(10, 4));
        assert!(result.definitions.is_none());
    }

    #[test]
    fn test_container_is_carried_into_record() {
        let symbol = Symbol::new("title", SymbolKind::Property)
            .with_container(Container::new("AppComponent", SymbolKind::Class))
            .with_definition(vec![DefinitionLocation::new(Span::new(5, 9), "a.ts")]);
        let locator = locator_for(SymbolMatch::new(symbol, Span::new(30, 35)));

        let result = template_definition_and_bound_span(&locator, &info()).unwrap();
        let definitions = result.definitions();
        assert_eq!(definitions.len(), 1);

        let record = &definitions[0];
        assert_eq!(record.kind, ElementKind::Property);
        assert_eq!(record.name, "title");
        assert_eq!(record.container_name, "AppComponent");
        assert_eq!(record.container_kind, ElementKind::Class);
        assert_eq!(record.text_span, TextSpan::new(5, 4));
        assert_eq!(record.file_name, PathBuf::from("a.ts"));
        assert_eq!(result.text_span, TextSpan::new(30, 5));
    }

    #[test]
    fn test_missing_container_is_unknown_and_empty() {
        let symbol = Symbol::new("onClick", SymbolKind::Method)
            .with_definition(vec![DefinitionLocation::new(Span::new(0, 7), "a.ts")]);
        let locator = locator_for(SymbolMatch::new(symbol, Span::new(3, 10)));

        let result = template_definition_and_bound_span(&locator, &info()).unwrap();
        let record = &result.definitions()[0];
        assert_eq!(record.container_kind, ElementKind::Unknown);
        assert_eq!(record.container_name, "");
    }

    #[test]
    fn test_container_with_empty_name_is_not_unknown() {
        let symbol = Symbol::new("value", SymbolKind::Property)
            .with_container(Container::new("", SymbolKind::Directive))
            .with_definition(vec![DefinitionLocation::new(Span::new(1, 2), "d.ts")]);
        let locator = locator_for(SymbolMatch::new(symbol, Span::new(0, 5)));

        let result = template_definition_and_bound_span(&locator, &info()).unwrap();
        let record = &result.definitions()[0];
        assert_eq!(record.container_kind, ElementKind::Directive);
        assert_eq!(record.container_name, "");
    }

    #[test]
    fn test_multiple_sites_keep_order_and_duplicates() {
        let sites = vec![
            DefinitionLocation::new(Span::new(40, 50), "b.directive.ts"),
            DefinitionLocation::new(Span::new(10, 20), "a.directive.ts"),
            DefinitionLocation::new(Span::new(10, 20), "a.directive.ts"),
        ];
        let symbol = Symbol::new("appHighlight", SymbolKind::Directive).with_definition(sites);
        let locator = locator_for(SymbolMatch::new(symbol, Span::new(6, 18)));

        let result = template_definition_and_bound_span(&locator, &info()).unwrap();
        let files: Vec<_> = result
            .definitions()
            .iter()
            .map(|d| (d.file_name.display().to_string(), d.text_span.start))
            .collect();
        assert_eq!(
            files,
            vec![
                ("b.directive.ts".to_string(), 40),
                ("a.directive.ts".to_string(), 10),
                ("a.directive.ts".to_string(), 10),
            ]
        );
        assert!(
            result
                .definitions()
                .iter()
                .all(|d| d.kind == ElementKind::Directive && d.name == "appHighlight")
        );
        assert_eq!(result.text_span, TextSpan::new(6, 12));
    }

    #[test]
    fn test_locator_receives_query() {
        let locator = |info: &TemplateInfo| {
            (info.position == 12).then(|| {
                SymbolMatch::new(Symbol::new("x", SymbolKind::Variable), Span::new(12, 13))
            })
        };
        assert!(template_definition_and_bound_span(&locator, &info()).is_some());
        assert!(
            template_definition_and_bound_span(&locator, &TemplateInfo::new("a.html", 0))
                .is_none()
        );
    }
}
