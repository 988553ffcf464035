//! The interactive menu: collect validated fields, call the index, print results.

use crate::prompt::{self, Prompter};
use realty_index::{NearQuery, Property, SpatialIndex};
use std::io::{BufRead, Write};

const MENU: &str = "\nReal Estate Property System\n\
1. Insert Property\n\
2. Query Properties\n\
3. Query Near Location\n\
4. Exit";

/// How query results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Text,
    Json,
}

enum Step {
    Continue,
    Exit,
}

pub struct Session<'a, R, W> {
    index: &'a mut SpatialIndex,
    prompter: Prompter<R, W>,
    output: Output,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(index: &'a mut SpatialIndex, prompter: Prompter<R, W>, output: Output) -> Self {
        Self {
            index,
            prompter,
            output,
        }
    }

    /// Run the menu until the user exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.prompter.say(MENU)?;
            let Some(choice) = self.prompter.ask_line("Enter your choice: ")? else {
                log::debug!("input closed, leaving menu");
                return Ok(());
            };

            let step = match choice.trim() {
                "1" => self.insert()?,
                "2" => self.range_query()?,
                "3" => self.near_query()?,
                "4" => {
                    self.prompter.say("Exiting...")?;
                    Step::Exit
                }
                _ => {
                    self.prompter.say("Invalid choice. Please try again.")?;
                    Step::Continue
                }
            };

            if let Step::Exit = step {
                return Ok(());
            }
        }
    }

    fn insert(&mut self) -> anyhow::Result<Step> {
        let p = &mut self.prompter;

        let Some(location) = p.ask_line("Enter property location: ")? else {
            return Ok(Step::Exit);
        };
        let Some(price) = p.ask(
            "Enter property price: ",
            "Invalid input. Please enter a positive number for price: ",
            prompt::non_negative,
        )?
        else {
            return Ok(Step::Exit);
        };
        let Some(area) = p.ask(
            "Enter property area: ",
            "Invalid input. Please enter a positive number for area: ",
            prompt::non_negative,
        )?
        else {
            return Ok(Step::Exit);
        };
        let Some(bedrooms) = p.ask(
            "Enter number of bedrooms: ",
            "Invalid input. Please enter a non-negative integer for bedrooms: ",
            prompt::count,
        )?
        else {
            return Ok(Step::Exit);
        };
        let Some(bbox) = p.ask(
            "Enter property bounding box (x_min y_min x_max y_max): ",
            "Invalid input. Ensure x_min <= x_max and y_min <= y_max. Enter bounding box (x_min y_min x_max y_max): ",
            prompt::rectangle,
        )?
        else {
            return Ok(Step::Exit);
        };

        match self
            .index
            .insert(Property::new(location, price, area, bedrooms, bbox))
        {
            Ok(()) => self.prompter.say("Property inserted.")?,
            Err(e) => self.prompter.say(format!("Property rejected: {}", e))?,
        }
        Ok(Step::Continue)
    }

    fn range_query(&mut self) -> anyhow::Result<Step> {
        let Some(region) = self.prompter.ask(
            "Enter query range (x_min y_min x_max y_max): ",
            "Invalid input. Ensure x_min <= x_max and y_min <= y_max. Enter query range (x_min y_min x_max y_max): ",
            prompt::rectangle,
        )?
        else {
            return Ok(Step::Exit);
        };

        let results = self.index.range_query(&region)?;
        report(
            &mut self.prompter,
            self.output,
            &results,
            "No properties found within the specified range.",
        )?;
        Ok(Step::Continue)
    }

    fn near_query(&mut self) -> anyhow::Result<Step> {
        let p = &mut self.prompter;

        let Some((x, y)) = p.ask(
            "Enter your location (x y): ",
            "Invalid input. Enter your location (x y): ",
            prompt::point,
        )?
        else {
            return Ok(Step::Exit);
        };
        let Some(radius) = p.ask(
            "Enter search distance (km): ",
            "Invalid input. Please enter a non-negative number for distance: ",
            prompt::non_negative,
        )?
        else {
            return Ok(Step::Exit);
        };
        let Some(max_price) = p.ask(
            "Enter maximum price: ",
            "Invalid input. Please enter a non-negative number for price: ",
            prompt::ceiling,
        )?
        else {
            return Ok(Step::Exit);
        };
        let Some(min_area) = p.ask(
            "Enter minimum area: ",
            "Invalid input. Please enter a non-negative number for area: ",
            prompt::non_negative,
        )?
        else {
            return Ok(Step::Exit);
        };
        let Some(min_bedrooms) = p.ask(
            "Enter minimum number of bedrooms: ",
            "Invalid input. Please enter a non-negative integer for bedrooms: ",
            prompt::count,
        )?
        else {
            return Ok(Step::Exit);
        };

        let query = NearQuery::new(x, y, radius)
            .with_max_price(max_price)
            .with_min_area(min_area)
            .with_min_bedrooms(min_bedrooms);
        let results = self.index.near_location_query(&query)?;
        report(
            &mut self.prompter,
            self.output,
            &results,
            "No properties found within the specified criteria.",
        )?;
        Ok(Step::Continue)
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.prompter.into_output()
    }
}

fn report<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    output: Output,
    results: &[&Property],
    empty: &str,
) -> anyhow::Result<()> {
    prompter.say("Query results:")?;
    if results.is_empty() {
        prompter.say(empty)?;
        return Ok(());
    }
    for property in results {
        match output {
            Output::Text => prompter.say(property)?,
            Output::Json => prompter.say(serde_json::to_string(property)?)?,
        }
    }
    Ok(())
}
