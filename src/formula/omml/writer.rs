// OMML element writer
//
// Each component maps to exactly one OMML element; argument slots (`m:e`,
// `m:num`, `m:sub`, ...) are always written, empty when the component has no
// content for them.

use super::error::OmmlWriteError;
use crate::common::xml::{escape_xml, escape_xml_into};
use crate::formula::ast::MathComponent;
use std::fmt::Write;

/// Namespace URI bound to the `m:` prefix
pub const OMML_NAMESPACE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";

/// Serialize components as an inline `<m:oMath>` element
///
/// # Example
/// ```
/// use litchi_mathml::formula::MathComponent;
/// use litchi_mathml::formula::omml::to_omml_string;
///
/// let xml = to_omml_string(&[MathComponent::run("x")]).unwrap();
/// assert_eq!(xml, "<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>");
/// ```
pub fn to_omml_string(components: &[MathComponent]) -> Result<String, OmmlWriteError> {
    let mut xml = String::with_capacity(estimate_capacity(components));
    xml.push_str("<m:oMath>");
    write_omml(components, &mut xml)?;
    xml.push_str("</m:oMath>");
    Ok(xml)
}

/// Serialize components as display math, an `<m:oMath>` inside `<m:oMathPara>`
pub fn to_omml_para_string(components: &[MathComponent]) -> Result<String, OmmlWriteError> {
    let mut xml = String::with_capacity(estimate_capacity(components) + 32);
    xml.push_str("<m:oMathPara><m:oMath>");
    write_omml(components, &mut xml)?;
    xml.push_str("</m:oMath></m:oMathPara>");
    Ok(xml)
}

/// Append the OMML for a component sequence to `xml`
pub fn write_omml(components: &[MathComponent], xml: &mut String) -> Result<(), OmmlWriteError> {
    for component in components {
        write_component(component, xml)?;
    }
    Ok(())
}

fn write_component(component: &MathComponent, xml: &mut String) -> Result<(), OmmlWriteError> {
    match component {
        MathComponent::Run(text) => write_run(text, xml),
        MathComponent::Fraction {
            numerator,
            denominator,
        } => {
            xml.push_str("<m:f>");
            write_slot("m:num", numerator, xml)?;
            write_slot("m:den", denominator, xml)?;
            xml.push_str("</m:f>");
            Ok(())
        },
        MathComponent::Radical { base, degree } => {
            xml.push_str("<m:rad>");
            match degree {
                Some(degree) => {
                    write_slot("m:deg", degree, xml)?;
                },
                None => {
                    xml.push_str("<m:radPr><m:degHide m:val=\"1\"/></m:radPr><m:deg/>");
                },
            }
            write_slot("m:e", base, xml)?;
            xml.push_str("</m:rad>");
            Ok(())
        },
        MathComponent::Superscript { base, superscript } => {
            xml.push_str("<m:sSup>");
            write_slot("m:e", base, xml)?;
            write_slot("m:sup", superscript, xml)?;
            xml.push_str("</m:sSup>");
            Ok(())
        },
        MathComponent::Subscript { base, subscript } => {
            xml.push_str("<m:sSub>");
            write_slot("m:e", base, xml)?;
            write_slot("m:sub", subscript, xml)?;
            xml.push_str("</m:sSub>");
            Ok(())
        },
        MathComponent::SubSuperscript {
            base,
            subscript,
            superscript,
        } => {
            xml.push_str("<m:sSubSup>");
            write_slot("m:e", base, xml)?;
            write_slot("m:sub", subscript, xml)?;
            write_slot("m:sup", superscript, xml)?;
            xml.push_str("</m:sSubSup>");
            Ok(())
        },
        MathComponent::Nary {
            operator,
            lower_limit,
            upper_limit,
            body,
        } => {
            xml.push_str("<m:nary><m:naryPr>");
            write!(xml, "<m:chr m:val=\"{}\"/>", operator.glyph())?;
            write!(xml, "<m:limLoc m:val=\"{}\"/>", operator.limit_location())?;
            if lower_limit.is_none() {
                xml.push_str("<m:subHide m:val=\"1\"/>");
            }
            if upper_limit.is_none() {
                xml.push_str("<m:supHide m:val=\"1\"/>");
            }
            xml.push_str("</m:naryPr>");
            write_slot("m:sub", lower_limit.as_deref().unwrap_or_default(), xml)?;
            write_slot("m:sup", upper_limit.as_deref().unwrap_or_default(), xml)?;
            write_slot("m:e", body, xml)?;
            xml.push_str("</m:nary>");
            Ok(())
        },
        MathComponent::Matrix { rows } => write_matrix(rows, xml),
        MathComponent::Accent { base, accent } => {
            xml.push_str("<m:acc><m:accPr>");
            write!(xml, "<m:chr m:val=\"{}\"/>", escape_xml(accent))?;
            xml.push_str("</m:accPr>");
            write_slot("m:e", base, xml)?;
            xml.push_str("</m:acc>");
            Ok(())
        },
    }
}

fn write_run(text: &str, xml: &mut String) -> Result<(), OmmlWriteError> {
    xml.push_str("<m:r>");
    // Word trims unmarked leading and trailing spaces
    if text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace) {
        xml.push_str("<m:t xml:space=\"preserve\">");
    } else {
        xml.push_str("<m:t>");
    }
    escape_xml_into(text, xml);
    xml.push_str("</m:t></m:r>");
    Ok(())
}

/// Write `<name>children</name>`
fn write_slot(
    name: &str,
    children: &[MathComponent],
    xml: &mut String,
) -> Result<(), OmmlWriteError> {
    write!(xml, "<{name}>")?;
    write_omml(children, xml)?;
    write!(xml, "</{name}>")?;
    Ok(())
}

fn write_matrix(rows: &[Vec<Vec<MathComponent>>], xml: &mut String) -> Result<(), OmmlWriteError> {
    xml.push_str("<m:m>");

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns > 0 {
        write!(
            xml,
            "<m:mPr><m:mcs><m:mc><m:mcPr><m:count m:val=\"{columns}\"/>\
             <m:mcJc m:val=\"center\"/></m:mcPr></m:mc></m:mcs></m:mPr>"
        )?;
    }

    for row in rows {
        xml.push_str("<m:mr>");
        for cell in row {
            write_slot("m:e", cell, xml)?;
        }
        // Ragged rows are padded so every row has the declared column count
        for _ in row.len()..columns {
            xml.push_str("<m:e></m:e>");
        }
        xml.push_str("</m:mr>");
    }

    xml.push_str("</m:m>");
    Ok(())
}

/// Rough output size, to avoid regrowing the buffer for typical formulas
fn estimate_capacity(components: &[MathComponent]) -> usize {
    components.len() * 48 + 32
}
