//! HTML snippets shaped like the catalogue pages, shared by parser and
//! pipeline tests.

pub type FixtureHole<'a> = (u32, u32, &'a [(&'a str, u32)]);

pub fn listing_page(cards: &[(&str, &str)], next: Option<&str>) -> String {
    let mut html = String::from("<html><body><div id=\"search-course-body\">");
    for (href, name) in cards {
        html.push_str(&format!(
            "<a href=\"{href}\"><h4>{name}</h4><span class=\"course-country\">Japan</span></a>"
        ));
    }
    html.push_str("</div>");
    if let Some(next) = next {
        html.push_str(&format!("<a rel=\"next\" href=\"{next}\">More</a>"));
    }
    html.push_str("</body></html>");
    html
}

fn hole_panel(number: u32, par: u32, tees: &[(&str, u32)]) -> String {
    let mut html = format!(
        "<div class=\"block\" data-hole=\"{number}\"><span class=\"gz-text-xsm\">PAR {par}</span>"
    );
    for (tee, yards) in tees {
        html.push_str(&format!(
            "<div class=\"flex items-center justify-between border-b\">\
               <div class=\"gz-text-md\">{tee}</div>\
               <div class=\"w-[78px] text-right\">{yards}yd</div>\
               <div class=\"w-[92px] text-right\">1.5yd</div>\
             </div>"
        ));
    }
    html.push_str(&format!(
        "<video class=\"video-crop\" src=\"https://cdn.example.com/holes/{number}.mp4\"></video></div>"
    ));
    html
}

pub fn course_page(name: &str, country: Option<&str>, holes: &[FixtureHole<'_>]) -> String {
    let par: u32 = holes.iter().map(|(_, par, _)| par).sum();
    let mut html = format!("<html><body><h1>{name}</h1>");
    if let Some(country) = country {
        html.push_str(&format!("<span class=\"course-country\">{country}</span>"));
    }
    html.push_str(&format!(
        "<div class=\"span-space--dot\"><span>{}H</span><span>Par {par}</span><span>6,412yd</span></div>",
        holes.len()
    ));
    for (number, par, tees) in holes {
        html.push_str(&hole_panel(*number, *par, tees));
    }
    html.push_str("</body></html>");
    html
}
