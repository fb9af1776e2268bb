// Fixtures are trimmed KaTeX `htmlAndMathml` output, MathML part only.

use crate::formula::*;

const MATH_OPEN: &str = r#"<span class="katex"><math xmlns="http://www.w3.org/1998/Math/MathML"><semantics><mrow>"#;

fn katex(body: &str, tex: &str) -> String {
    format!(
        r#"{MATH_OPEN}{body}</mrow><annotation encoding="application/x-tex">{tex}</annotation></semantics></math></span>"#
    )
}

fn convert(body: &str, tex: &str) -> Vec<MathComponent> {
    mathml_to_omml(&katex(body, tex), &ConvertOptions::default()).unwrap()
}

fn convert_compat(body: &str, tex: &str) -> Vec<MathComponent> {
    let options = ConvertOptions::new().with_libreoffice_compat(true);
    mathml_to_omml(&katex(body, tex), &options).unwrap()
}

const VEC_F: (&str, &str) = (
    r#"<mover accent="true"><mi>F</mi><mo stretchy="false">⃗</mo></mover>"#,
    r"\vec{F}",
);
const HAT_X: (&str, &str) = (r#"<mover accent="true"><mi>x</mi><mo>^</mo></mover>"#, r"\hat{x}");
const OVERLINE_AB: (&str, &str) = (
    r#"<mover accent="true"><mrow><mi>A</mi><mi>B</mi></mrow><mo>‾</mo></mover>"#,
    r"\overline{AB}",
);
const VEC_SUM: (&str, &str) = (
    r#"<mover accent="true"><mrow><mi>x</mi><mo>+</mo><mi>y</mi></mrow><mo stretchy="false">⃗</mo></mover>"#,
    r"\vec{x+y}",
);
const SUM_DISPLAY: (&str, &str) = (
    "<munderover><mo>∑</mo><mrow><mi>i</mi><mo>=</mo><mn>1</mn></mrow><mi>n</mi></munderover><mi>i</mi>",
    r"\sum_{i=1}^{n} i",
);
const SUM_INLINE: (&str, &str) = (
    "<msubsup><mo>∑</mo><mrow><mi>i</mi><mo>=</mo><mn>1</mn></mrow><mi>n</mi></msubsup><mi>i</mi>",
    r"\sum_{i=1}^{n} i",
);
const INTEGRAL: (&str, &str) = (
    r#"<msubsup><mo>∫</mo><mn>0</mn><mn>1</mn></msubsup><mi>x</mi><mspace width="0.1667em"></mspace><mi>d</mi><mi>x</mi>"#,
    r"\int_0^1 x\,dx",
);

fn single_accent((body, tex): (&str, &str)) -> MathComponent {
    let components = convert(body, tex);
    assert_eq!(components.len(), 1, "{tex}: {components:?}");
    assert_eq!(components[0].kind(), ComponentKind::Accent, "{tex}");
    assert_eq!(components[0].element_name(), "m:acc");
    components.into_iter().next().unwrap()
}

#[test]
fn test_vec_accent() {
    let accent = single_accent(VEC_F);
    assert_eq!(accent.text_content(), "F");
    assert_eq!(accent.accent_type(), Some(AccentType::Vec));
}

#[test]
fn test_hat_accent() {
    let accent = single_accent(HAT_X);
    assert_eq!(accent.text_content(), "x");
    assert_eq!(accent.accent_type(), Some(AccentType::Hat));
}

#[test]
fn test_overline_accent() {
    let accent = single_accent(OVERLINE_AB);
    let text = accent.text_content();
    assert!(text.contains('A') && text.contains('B'));
    assert_eq!(accent.accent_type(), Some(AccentType::Bar));
}

#[test]
fn test_vec_accent_over_expression() {
    let accent = single_accent(VEC_SUM);
    assert_eq!(accent.text_content(), "x+y");
    let MathComponent::Accent { base, .. } = &accent else {
        unreachable!()
    };
    assert_eq!(base.len(), 3);
}

#[test]
fn test_display_sum() {
    let (body, tex) = SUM_DISPLAY;
    let components = convert(body, tex);
    assert_eq!(components[0].kind(), ComponentKind::NarySum);
    assert_eq!(
        components,
        vec![MathComponent::Nary {
            operator: LargeOperator::Sum,
            lower_limit: Some(vec![
                MathComponent::run("i"),
                MathComponent::run("="),
                MathComponent::run("1"),
            ]),
            upper_limit: Some(vec![MathComponent::run("n")]),
            body: vec![MathComponent::run("i")],
        }]
    );
}

#[test]
fn test_inline_sum_matches_display() {
    let (display, tex) = SUM_DISPLAY;
    let (inline, _) = SUM_INLINE;
    assert_eq!(convert(display, tex), convert(inline, tex));
}

#[test]
fn test_integral() {
    let (body, tex) = INTEGRAL;
    let components = convert(body, tex);
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].kind(), ComponentKind::NaryIntegral);
    assert_eq!(components[0].text_content(), "01xdx");
}

#[test]
fn test_compat_mode_never_emits_nary() {
    for (body, tex) in [SUM_DISPLAY, SUM_INLINE, INTEGRAL] {
        let components = convert_compat(body, tex);
        assert!(components.iter().all(|c| !c.kind().is_nary()), "{tex}");
        assert_eq!(components[0].kind(), ComponentKind::SubSuperscript, "{tex}");
        let MathComponent::SubSuperscript { base, .. } = &components[0] else {
            unreachable!()
        };
        assert!(matches!(base.as_slice(), [MathComponent::Run(glyph)] if glyph == "∑" || glyph == "∫"));
    }

    let (body, tex) = SUM_DISPLAY;
    assert_eq!(
        convert_compat(body, tex)[1..],
        [MathComponent::run("i")]
    );
}

#[test]
fn test_annotation_never_reaches_output() {
    for (body, tex) in [VEC_F, SUM_DISPLAY, INTEGRAL] {
        let text = text_of(&convert(body, tex));
        assert!(!text.contains('\\'), "{tex} leaked into {text}");
    }
}

#[test]
fn test_matrix_cells_convert_independently() {
    let cells = [
        ["<mi>a</mi>", "<msup><mi>b</mi><mn>2</mn></msup>", "<mn>0</mn>"],
        ["<mfrac><mn>1</mn><mn>2</mn></mfrac>", "<mi>c</mi>", "<mn>1</mn>"],
    ];
    let mut body = String::from(r#"<mrow><mo fence="true">(</mo><mtable rowspacing="0.16em" columnalign="center center center" columnspacing="1em">"#);
    for row in &cells {
        body.push_str("<mtr>");
        for cell in row {
            body.push_str(r#"<mtd><mstyle scriptlevel="0" displaystyle="false">"#);
            body.push_str(cell);
            body.push_str("</mstyle></mtd>");
        }
        body.push_str("</mtr>");
    }
    body.push_str(r#"</mtable><mo fence="true">)</mo></mrow>"#);

    let components = convert(&body, r"\begin{pmatrix}...\end{pmatrix}");
    assert_eq!(components.len(), 3);
    assert_eq!(components[0], MathComponent::run("("));
    assert_eq!(components[2], MathComponent::run(")"));

    let MathComponent::Matrix { rows } = &components[1] else {
        panic!("expected matrix, got {:?}", components[1]);
    };
    assert_eq!(rows.len(), 2);
    for (row, expected_row) in rows.iter().zip(&cells) {
        assert_eq!(row.len(), 3);
        for (cell, source) in row.iter().zip(expected_row) {
            let alone = mathml_to_omml(&format!("<math>{source}</math>"), &ConvertOptions::default())
                .unwrap();
            assert_eq!(cell, &alone);
        }
    }
}

#[test]
fn test_matrix_compat_brackets() {
    let body = "<mtable><mtr><mtd><mi>a</mi></mtd><mtd><mi>b</mi></mtd></mtr>\
                <mtr><mtd><mi>c</mi></mtd><mtd><mi>d</mi></mtd></mtr></mtable>";
    let components = convert_compat(body, r"\begin{matrix}a&amp;b\\c&amp;d\end{matrix}");
    assert_eq!(text_of(&components), "[a, b; c, d]");
    assert!(components.iter().all(|c| c.kind() == ComponentKind::Run));
}

#[test]
fn test_multiple_operators_nest_into_first_body() {
    // Known limitation: a later operator in the same row becomes part of the
    // first operator's body
    let body = "<munder><mo>∑</mo><mi>i</mi></munder><msub><mi>a</mi><mi>i</mi></msub>\
                <mo>+</mo><munder><mo>∑</mo><mi>j</mi></munder><msub><mi>b</mi><mi>j</mi></msub>";
    let components = convert(body, r"\sum_i a_i + \sum_j b_j");
    assert_eq!(components.len(), 1);
    let MathComponent::Nary { body, .. } = &components[0] else {
        panic!("expected n-ary, got {:?}", components[0]);
    };
    assert_eq!(body.len(), 3);
    assert_eq!(body[0].kind(), ComponentKind::Subscript);
    assert_eq!(body[1], MathComponent::run("+"));
    assert_eq!(body[2].kind(), ComponentKind::NarySum);
}

#[test]
fn test_no_math_is_empty() {
    let options = ConvertOptions::default();
    assert!(mathml_to_omml(r#"<span class="katex-html">x</span>"#, &options).unwrap().is_empty());
    assert!(mathml_to_omml("", &options).unwrap().is_empty());
}

#[test]
fn test_fraction_and_root() {
    let components = convert(
        "<mfrac><mrow><mo>−</mo><mi>b</mi></mrow><mrow><mn>2</mn><mi>a</mi></mrow></mfrac>\
         <mo>+</mo><mroot><mi>x</mi><mn>3</mn></mroot>",
        r"\frac{-b}{2a}+\sqrt[3]{x}",
    );
    let kinds: Vec<ComponentKind> = components.iter().map(MathComponent::kind).collect();
    assert_eq!(
        kinds,
        [ComponentKind::Fraction, ComponentKind::Run, ComponentKind::Radical]
    );
    assert_eq!(text_of(&components), "−b2a+3x");
}

#[cfg(feature = "omml")]
#[test]
fn test_omml_output() {
    let options = ConvertOptions::default();
    let (body, tex) = VEC_F;
    let xml = mathml_to_omml_xml(&katex(body, tex), &options).unwrap();
    assert_eq!(
        xml,
        "<m:oMath><m:acc><m:accPr><m:chr m:val=\"⃗\"/></m:accPr><m:e><m:r><m:t>F</m:t></m:r></m:e></m:acc></m:oMath>"
    );

    let (body, tex) = SUM_DISPLAY;
    let xml = mathml_to_omml_xml(&katex(body, tex), &options).unwrap();
    assert!(xml.contains("<m:nary><m:naryPr><m:chr m:val=\"∑\"/><m:limLoc m:val=\"undOvr\"/></m:naryPr>"));
    assert!(!xml.contains("Hide"));

    let (body, tex) = INTEGRAL;
    let components = mathml_to_omml(&katex(body, tex), &options).unwrap();
    let para = omml::to_omml_para_string(&components).unwrap();
    assert!(para.starts_with("<m:oMathPara><m:oMath><m:nary>"));
    assert!(para.contains("<m:limLoc m:val=\"subSup\"/>"));
}
