//! Layout document composition
//!
//! The layout document is assembled from ordered, independently well-formed
//! sections joined by one blank line. Conditional sections add or drop
//! whole blocks, so an omitted section can never leave a dangling
//! separator. Composition is total: any syntactically valid settings value
//! produces a document, including empty strings and empty collections.

use crate::color;
use crate::modules;
use crate::settings::{PaperSize, Settings, SurveyStyle};

use super::{compile_symbol_directives, LAYOUT_BLOCK_NAME};

/// Compose the complete layout document
pub fn generate_layout(settings: &Settings) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push("encoding utf-8".to_string());

    sections.push(format!(
        "layout {LAYOUT_BLOCK_NAME}\n  doc-author \"{}\"\n  scale 1 {}\n  language {}",
        settings.author, settings.scale, settings.language
    ));

    sections.push(color_section(settings));
    sections.push(format!("  symbol-set {}", settings.resolved_symbol_set()));

    let symbol_lines = compile_symbol_directives(settings);
    if !symbol_lines.is_empty() {
        sections.push(symbol_lines.join("\n"));
    }

    sections.push(survey_section(settings));
    sections.push(presentation_section(settings));
    sections.push(header_section(settings));
    sections.push(tex_legend_section(settings));

    if settings.debug_station_names {
        sections.push(debug_section(settings));
    }

    let module_code =
        modules::resolve_enabled(&settings.custom_modules, &settings.enabled_modules);
    if !module_code.is_empty() {
        sections.push(module_code);
    }

    sections.push("endlayout".to_string());
    sections.push(page_section(settings.paper_size));

    let mut document = sections.join("\n\n");
    document.push('\n');
    document
}

fn color_section(settings: &Settings) -> String {
    // Print output must not carry a tinted background
    let bg = if settings.print_mode {
        color::FALLBACK_PERCENT.to_string()
    } else {
        color::to_percent_triplet(&settings.map_bg_color)
    };
    let fg = color::to_percent_triplet(&settings.map_fg_color);

    format!("  color map-bg {bg}\n  color map-fg {fg}")
}

fn survey_section(settings: &Settings) -> String {
    if !settings.show_survey {
        return "  symbol-hide line survey".to_string();
    }

    let survey_color = color::to_unit_triplet(&settings.survey_color);
    let stroke = match settings.survey_style {
        SurveyStyle::Solid => "",
        SurveyStyle::Dashed => " dashed evenly",
        SurveyStyle::Dotted => " dashed withdots",
    };

    format!(
        r"  code metapost
    def l_survey_cave (expr P) =
      T:=identity;
      pair zz[];
      pickup PenC;
      for t = 0 upto length P - 1:
        zz1 := point t of P;
        zz2 := point t+1 of P;
        draw zz1 -- zz2 withcolor {survey_color}{stroke};
      endfor;
    enddef;
  endcode"
    )
}

fn presentation_section(settings: &Settings) -> String {
    let mut lines = vec![
        format!("  rotate {}", settings.rotation),
        format!("  transparency {}", on_off(settings.transparency)),
        format!("  overlap {} cm", settings.overlap),
        format!("  scale-bar {} m", settings.scale_bar_length),
    ];

    if settings.show_grid {
        let g = settings.grid_size;
        lines.push("  grid bottom".to_string());
        lines.push(format!("  grid-size {g} {g} {g} m"));
    } else {
        lines.push("  grid off".to_string());
    }

    lines.join("\n")
}

fn header_section(settings: &Settings) -> String {
    [
        format!(
            "  map-header {} {} {}",
            settings.header_x, settings.header_y, settings.header_anchor
        ),
        format!("  map-header-bg {}", on_off(settings.header_bg)),
        format!("  legend {}", on_off(settings.show_legend)),
        format!("  legend-width {} cm", settings.legend_width),
        format!("  legend-columns {}", settings.legend_columns),
    ]
    .join("\n")
}

/// The `code tex-map` block holding the header/legend content
///
/// Emptiness of the cave name, comment and team registers is tested on the
/// TeX side, so those guards are always emitted; the logo line and the
/// length/depth suppression are decided here.
fn tex_legend_section(settings: &Settings) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("  code tex-map".to_string());
    lines.push(r"    \newtoks\topoteam \newtoks\cartoteam".to_string());
    lines.push(String::new());
    lines.push(format!(r"    \cavename={{{}}}", settings.cave_name));
    lines.push(format!(r"    \comment={{{}}}", settings.comment));
    lines.push(format!(r"    \topoteam={{{}}}", settings.topo_team));
    lines.push(format!(r"    \cartoteam={{{}}}", settings.carto_team));
    lines.push(String::new());
    lines.push(r"    \legendcontent={%".to_string());
    lines.push(r"      \hsize=\legendwidth".to_string());
    lines.push(r"      \ifnortharrow\vbox to 0pt{\line{\hfil\northarrow}\vss}\fi".to_string());

    if !settings.logo_path.is_empty() {
        lines.push(format!(
            r"      \vbox{{\externalfigure[{}][width={}cm]}}\vskip0.5cm",
            settings.logo_path, settings.logo_width
        ));
    }

    lines.push(r"      \edef\tmp{\the\cavename} \ifx\tmp\empty \else".to_string());
    lines.push(format!(
        r"        {{\size[{}]\the\cavename}} \vskip1cm",
        settings.cave_name_font_size
    ));
    lines.push(r"      \fi".to_string());
    lines.push(r"      \ifscalebar\scalebar\vskip1cm\fi".to_string());
    lines.push(r"      {\ss".to_string());
    lines.push(
        r"        \edef\tmp{\the\comment} \ifx\tmp\empty \else \tmp \vskip0.5cm \fi".to_string(),
    );
    lines.push(format!(
        r"        {{\bf {}:}} {} \vskip0.2cm",
        settings.explo_title, settings.explo_team
    ));
    lines.push(
        r"        \edef\tmp{\the\topoteam} \ifx\tmp\empty \else {\bf Meranie:} \the\topoteam \vskip0.2cm \fi"
            .to_string(),
    );
    lines.push(
        r"        \edef\tmp{\the\cartoteam} \ifx\tmp\empty \else {\bf Kartografia:} \the\cartoteam \vskip0.2cm \fi"
            .to_string(),
    );
    lines.push(r"      }".to_string());
    lines.push(String::new());
    lines.push(r"      \vskip1cm".to_string());
    lines.push(r"      \formattedlegend".to_string());
    lines.push(r"    }".to_string());

    if settings.hide_length {
        lines.push(r"    \cavelength={}".to_string());
    }
    if settings.hide_depth {
        lines.push(r"    \cavedepth={}".to_string());
    }

    lines.push(String::new());
    let thickness = if settings.show_border {
        settings.border_thickness
    } else {
        0.0
    };
    lines.push(format!(r"    \framethickness={thickness}mm"));
    lines.push("  endcode".to_string());

    lines.join("\n")
}

fn debug_section(settings: &Settings) -> String {
    format!(
        "  debug station-names\n  code tex-map\n    \\def\\printstationlabel#1{{\\size[{}]\\ss #1}}\n  endcode",
        settings.station_label_size
    )
}

/// Page geometry in centimeters: page size, printable area, margins
struct PageSetup {
    page_width: f64,
    page_height: f64,
    print_width: f64,
    print_height: f64,
    margin_x: f64,
    margin_y: f64,
}

fn page_setup(size: PaperSize) -> PageSetup {
    let (page_width, page_height, print_width, print_height, margin_x, margin_y) = match size {
        PaperSize::A4 => (21.0, 29.7, 19.0, 27.7, 1.0, 1.0),
        PaperSize::A3 => (29.7, 42.0, 27.7, 40.0, 1.0, 1.0),
        PaperSize::A2 => (42.0, 59.4, 40.0, 57.4, 1.0, 1.0),
        PaperSize::A1 => (59.4, 84.1, 56.4, 81.1, 1.5, 1.0),
        PaperSize::A0 => (84.1, 118.9, 81.1, 115.9, 1.5, 1.0),
    };
    PageSetup {
        page_width,
        page_height,
        print_width,
        print_height,
        margin_x,
        margin_y,
    }
}

fn page_section(size: PaperSize) -> String {
    let p = page_setup(size);
    format!(
        "layout {}\n  page-setup {} {} {} {} {} {} cm\nendlayout",
        size.layout_name(),
        p.page_width,
        p.page_height,
        p.print_width,
        p.print_height,
        p.margin_x,
        p.margin_y
    )
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
