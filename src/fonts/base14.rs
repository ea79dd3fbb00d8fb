//! Built-in metrics for the Helvetica faces used by the résumé layout.
//!
//! The tables are AFM text (`C code ; WX width ; N name ;`) and go through
//! the same parser as metrics loaded from disk. Codes 32-126 follow
//! StandardEncoding; accented and typographic glyphs carry code -1. The
//! parser maps glyph names onto their WinAnsi characters, so the accented
//! letters and the straight quote get the widths the viewer will draw.

use super::afm::AfmMetrics;
use crate::error::Result;

/// Helvetica character metrics.
pub(crate) const HELVETICA: &str = "\
StartFontMetrics 4.1
FontName Helvetica
StartCharMetrics 109
C 32 ; WX 278 ; N space ;
C 33 ; WX 278 ; N exclam ;
C 34 ; WX 355 ; N quotedbl ;
C 35 ; WX 556 ; N numbersign ;
C 36 ; WX 556 ; N dollar ;
C 37 ; WX 889 ; N percent ;
C 38 ; WX 667 ; N ampersand ;
C 39 ; WX 222 ; N quoteright ;
C 40 ; WX 333 ; N parenleft ;
C 41 ; WX 333 ; N parenright ;
C 42 ; WX 389 ; N asterisk ;
C 43 ; WX 584 ; N plus ;
C 44 ; WX 278 ; N comma ;
C 45 ; WX 333 ; N hyphen ;
C 46 ; WX 278 ; N period ;
C 47 ; WX 278 ; N slash ;
C 48 ; WX 556 ; N zero ;
C 49 ; WX 556 ; N one ;
C 50 ; WX 556 ; N two ;
C 51 ; WX 556 ; N three ;
C 52 ; WX 556 ; N four ;
C 53 ; WX 556 ; N five ;
C 54 ; WX 556 ; N six ;
C 55 ; WX 556 ; N seven ;
C 56 ; WX 556 ; N eight ;
C 57 ; WX 556 ; N nine ;
C 58 ; WX 278 ; N colon ;
C 59 ; WX 278 ; N semicolon ;
C 60 ; WX 584 ; N less ;
C 61 ; WX 584 ; N equal ;
C 62 ; WX 584 ; N greater ;
C 63 ; WX 556 ; N question ;
C 64 ; WX 1015 ; N at ;
C 65 ; WX 667 ; N A ;
C 66 ; WX 667 ; N B ;
C 67 ; WX 722 ; N C ;
C 68 ; WX 722 ; N D ;
C 69 ; WX 667 ; N E ;
C 70 ; WX 611 ; N F ;
C 71 ; WX 778 ; N G ;
C 72 ; WX 722 ; N H ;
C 73 ; WX 278 ; N I ;
C 74 ; WX 500 ; N J ;
C 75 ; WX 667 ; N K ;
C 76 ; WX 556 ; N L ;
C 77 ; WX 833 ; N M ;
C 78 ; WX 722 ; N N ;
C 79 ; WX 778 ; N O ;
C 80 ; WX 667 ; N P ;
C 81 ; WX 778 ; N Q ;
C 82 ; WX 722 ; N R ;
C 83 ; WX 667 ; N S ;
C 84 ; WX 611 ; N T ;
C 85 ; WX 722 ; N U ;
C 86 ; WX 667 ; N V ;
C 87 ; WX 944 ; N W ;
C 88 ; WX 667 ; N X ;
C 89 ; WX 667 ; N Y ;
C 90 ; WX 611 ; N Z ;
C 91 ; WX 278 ; N bracketleft ;
C 92 ; WX 278 ; N backslash ;
C 93 ; WX 278 ; N bracketright ;
C 94 ; WX 469 ; N asciicircum ;
C 95 ; WX 556 ; N underscore ;
C 96 ; WX 222 ; N quoteleft ;
C 97 ; WX 556 ; N a ;
C 98 ; WX 556 ; N b ;
C 99 ; WX 500 ; N c ;
C 100 ; WX 556 ; N d ;
C 101 ; WX 556 ; N e ;
C 102 ; WX 278 ; N f ;
C 103 ; WX 556 ; N g ;
C 104 ; WX 556 ; N h ;
C 105 ; WX 222 ; N i ;
C 106 ; WX 222 ; N j ;
C 107 ; WX 500 ; N k ;
C 108 ; WX 222 ; N l ;
C 109 ; WX 833 ; N m ;
C 110 ; WX 556 ; N n ;
C 111 ; WX 556 ; N o ;
C 112 ; WX 556 ; N p ;
C 113 ; WX 556 ; N q ;
C 114 ; WX 333 ; N r ;
C 115 ; WX 500 ; N s ;
C 116 ; WX 278 ; N t ;
C 117 ; WX 556 ; N u ;
C 118 ; WX 500 ; N v ;
C 119 ; WX 722 ; N w ;
C 120 ; WX 500 ; N x ;
C 121 ; WX 500 ; N y ;
C 122 ; WX 500 ; N z ;
C 123 ; WX 334 ; N braceleft ;
C 124 ; WX 260 ; N bar ;
C 125 ; WX 334 ; N braceright ;
C 126 ; WX 584 ; N asciitilde ;
C -1 ; WX 350 ; N bullet ;
C -1 ; WX 556 ; N endash ;
C -1 ; WX 1000 ; N emdash ;
C -1 ; WX 333 ; N quotedblleft ;
C -1 ; WX 333 ; N quotedblright ;
C -1 ; WX 556 ; N eacute ;
C -1 ; WX 556 ; N egrave ;
C -1 ; WX 556 ; N aacute ;
C -1 ; WX 556 ; N oacute ;
C -1 ; WX 556 ; N udieresis ;
C -1 ; WX 500 ; N ccedilla ;
C -1 ; WX 667 ; N Eacute ;
C -1 ; WX 191 ; N quotesingle ;
C -1 ; WX 333 ; N grave ;
EndCharMetrics
EndFontMetrics
";

/// Helvetica-Bold character metrics.
pub(crate) const HELVETICA_BOLD: &str = "\
StartFontMetrics 4.1
FontName Helvetica-Bold
StartCharMetrics 109
C 32 ; WX 278 ; N space ;
C 33 ; WX 333 ; N exclam ;
C 34 ; WX 474 ; N quotedbl ;
C 35 ; WX 556 ; N numbersign ;
C 36 ; WX 556 ; N dollar ;
C 37 ; WX 889 ; N percent ;
C 38 ; WX 722 ; N ampersand ;
C 39 ; WX 278 ; N quoteright ;
C 40 ; WX 333 ; N parenleft ;
C 41 ; WX 333 ; N parenright ;
C 42 ; WX 389 ; N asterisk ;
C 43 ; WX 584 ; N plus ;
C 44 ; WX 278 ; N comma ;
C 45 ; WX 333 ; N hyphen ;
C 46 ; WX 278 ; N period ;
C 47 ; WX 278 ; N slash ;
C 48 ; WX 556 ; N zero ;
C 49 ; WX 556 ; N one ;
C 50 ; WX 556 ; N two ;
C 51 ; WX 556 ; N three ;
C 52 ; WX 556 ; N four ;
C 53 ; WX 556 ; N five ;
C 54 ; WX 556 ; N six ;
C 55 ; WX 556 ; N seven ;
C 56 ; WX 556 ; N eight ;
C 57 ; WX 556 ; N nine ;
C 58 ; WX 333 ; N colon ;
C 59 ; WX 333 ; N semicolon ;
C 60 ; WX 584 ; N less ;
C 61 ; WX 584 ; N equal ;
C 62 ; WX 584 ; N greater ;
C 63 ; WX 611 ; N question ;
C 64 ; WX 975 ; N at ;
C 65 ; WX 722 ; N A ;
C 66 ; WX 722 ; N B ;
C 67 ; WX 722 ; N C ;
C 68 ; WX 722 ; N D ;
C 69 ; WX 667 ; N E ;
C 70 ; WX 611 ; N F ;
C 71 ; WX 778 ; N G ;
C 72 ; WX 722 ; N H ;
C 73 ; WX 278 ; N I ;
C 74 ; WX 556 ; N J ;
C 75 ; WX 722 ; N K ;
C 76 ; WX 611 ; N L ;
C 77 ; WX 833 ; N M ;
C 78 ; WX 722 ; N N ;
C 79 ; WX 778 ; N O ;
C 80 ; WX 667 ; N P ;
C 81 ; WX 778 ; N Q ;
C 82 ; WX 722 ; N R ;
C 83 ; WX 667 ; N S ;
C 84 ; WX 611 ; N T ;
C 85 ; WX 722 ; N U ;
C 86 ; WX 667 ; N V ;
C 87 ; WX 944 ; N W ;
C 88 ; WX 667 ; N X ;
C 89 ; WX 667 ; N Y ;
C 90 ; WX 611 ; N Z ;
C 91 ; WX 333 ; N bracketleft ;
C 92 ; WX 278 ; N backslash ;
C 93 ; WX 333 ; N bracketright ;
C 94 ; WX 584 ; N asciicircum ;
C 95 ; WX 556 ; N underscore ;
C 96 ; WX 278 ; N quoteleft ;
C 97 ; WX 556 ; N a ;
C 98 ; WX 611 ; N b ;
C 99 ; WX 556 ; N c ;
C 100 ; WX 611 ; N d ;
C 101 ; WX 556 ; N e ;
C 102 ; WX 333 ; N f ;
C 103 ; WX 611 ; N g ;
C 104 ; WX 611 ; N h ;
C 105 ; WX 278 ; N i ;
C 106 ; WX 278 ; N j ;
C 107 ; WX 556 ; N k ;
C 108 ; WX 278 ; N l ;
C 109 ; WX 889 ; N m ;
C 110 ; WX 611 ; N n ;
C 111 ; WX 611 ; N o ;
C 112 ; WX 611 ; N p ;
C 113 ; WX 611 ; N q ;
C 114 ; WX 389 ; N r ;
C 115 ; WX 556 ; N s ;
C 116 ; WX 333 ; N t ;
C 117 ; WX 611 ; N u ;
C 118 ; WX 556 ; N v ;
C 119 ; WX 778 ; N w ;
C 120 ; WX 556 ; N x ;
C 121 ; WX 556 ; N y ;
C 122 ; WX 500 ; N z ;
C 123 ; WX 389 ; N braceleft ;
C 124 ; WX 280 ; N bar ;
C 125 ; WX 389 ; N braceright ;
C 126 ; WX 584 ; N asciitilde ;
C -1 ; WX 350 ; N bullet ;
C -1 ; WX 556 ; N endash ;
C -1 ; WX 1000 ; N emdash ;
C -1 ; WX 500 ; N quotedblleft ;
C -1 ; WX 500 ; N quotedblright ;
C -1 ; WX 556 ; N eacute ;
C -1 ; WX 556 ; N egrave ;
C -1 ; WX 556 ; N aacute ;
C -1 ; WX 611 ; N oacute ;
C -1 ; WX 611 ; N udieresis ;
C -1 ; WX 556 ; N ccedilla ;
C -1 ; WX 667 ; N Eacute ;
C -1 ; WX 238 ; N quotesingle ;
C -1 ; WX 333 ; N grave ;
EndCharMetrics
EndFontMetrics
";

/// Built-in fonts as (registry name, AFM text).
///
/// The oblique face shares the upright advance widths.
const BUILTIN: &[(&str, &str)] = &[
    ("Helvetica", HELVETICA),
    ("Helvetica-Bold", HELVETICA_BOLD),
    ("Helvetica-Oblique", HELVETICA),
];

/// Parse every built-in font.
pub(crate) fn builtin_metrics() -> Result<Vec<(&'static str, AfmMetrics)>> {
    BUILTIN
        .iter()
        .map(|(name, data)| Ok((*name, AfmMetrics::parse(data)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FontMetrics;

    #[test]
    fn test_builtin_tables_parse() {
        let fonts = builtin_metrics().unwrap();
        assert_eq!(fonts.len(), 3);
        for (_, metrics) in &fonts {
            // 95 coded glyphs plus seven accented letters, no-break space
            // and soft hyphen.
            assert_eq!(metrics.glyph_count(), 104);
        }
    }

    #[test]
    fn test_helvetica_widths() {
        let helvetica = AfmMetrics::parse(HELVETICA).unwrap();
        assert_eq!(helvetica.font_name(), Some("Helvetica"));
        assert_eq!(helvetica.char_width(' '), 278);
        assert_eq!(helvetica.char_width('-'), 333);
        assert_eq!(helvetica.char_width('W'), 944);
        assert_eq!(helvetica.char_width('i'), 222);
        assert_eq!(helvetica.named_width("eacute"), Some(556));
        assert_eq!(helvetica.char_width('é'), 556);
        assert_eq!(helvetica.char_width('É'), 667);
        assert_eq!(helvetica.char_width('\''), 191);
        assert_eq!(helvetica.char_width('`'), 333);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = AfmMetrics::parse(HELVETICA).unwrap();
        let bold = AfmMetrics::parse(HELVETICA_BOLD).unwrap();
        let text = "Senior Software Engineer";
        assert!(bold.text_width(12.0, text) > regular.text_width(12.0, text));
    }
}
