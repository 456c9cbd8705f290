use tinta_color::Rgba;

use super::Deriver;
use crate::scale::{Tint::*, TintScale};
use crate::tokens::{BaseTokens, SyntaxTokens};
use crate::tone::SpotHue;

impl Deriver<'_> {
    /// Flat accent color of a spot hue on this surface
    pub fn spot(&self, base: &BaseTokens, hue: SpotHue) -> Rgba {
        self.blend(base.bg, self.stop(self.spots.get(hue), T400, T500))
    }

    /// Syntax highlighting colors
    ///
    /// Comments, doctype and prolog take the secondary gray stop; every other
    /// category takes the main stop of its hue.
    pub fn syntax(&self, base: &BaseTokens) -> SyntaxTokens {
        let spots = self.spots;
        let main = |scale: &TintScale| self.blend(base.bg, self.stop(scale, T400, T600));
        let secondary = |scale: &TintScale| self.blend(base.bg, self.stop(scale, T600, T400));

        let purple = main(&spots.purple);
        let green = main(&spots.green);
        let yellow = main(&spots.yellow);
        let orange = main(&spots.orange);
        let cyan = main(&spots.cyan);
        let red = main(&spots.red);
        let blue = main(&spots.blue);
        let magenta = main(&spots.magenta);
        let gray = main(&spots.gray);
        let faded = secondary(&spots.gray);

        SyntaxTokens {
            atrule: purple,
            attr_name: green,
            attr_value: yellow,
            attribute: yellow,
            boolean: purple,
            builtin: purple,
            cdata: yellow,
            char: yellow,
            class: orange,
            class_name: cyan,
            comment: faded,
            constant: purple,
            deleted: red,
            doctype: faded,
            entity: red,
            function: green,
            hexcode: blue,
            id: purple,
            important: purple,
            inserted: yellow,
            keyword: magenta,
            number: purple,
            operator: magenta,
            prolog: faded,
            property: blue,
            pseudo_class: yellow,
            pseudo_element: yellow,
            punctuation: gray,
            regex: blue,
            selector: red,
            string: yellow,
            symbol: purple,
            tag: red,
            unit: orange,
            url: red,
            variable: red,
        }
    }
}
